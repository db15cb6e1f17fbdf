//! Application state and the main event loop.
//!
//! A single `tokio::select!` loop multiplexes crossterm key events and
//! a redraw tick; the run task inside the engine owns all per-step
//! timing, so the loop only ever reads committed snapshots.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use starscan_engine::{Dataset, DatasetError, Sequencer, chat};
use starscan_protocol::{
    Algorithm, ConversationRecord, ConversationStore, OutcomeReporter, Scenario, SpeedPreset,
};
use starscan_storage::{LogStore, SessionAuth, StoredSession};

use crate::context::{Cue, UiContext};
use crate::views;

/// Redraw/poll cadence.
const TICK: Duration = Duration::from_millis(100);

/// Carousel auto-rotate period, in ticks.
const CAROUSEL_ROTATE_TICKS: u32 = 50;

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Home,
    Visualizer,
}

/// Which text field receives typed characters on the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EditTarget,
    EditCustom,
}

/// Auth form focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Name,
    Email,
}

/// One rendered chat line.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub from_bot: bool,
    pub text: String,
}

/// Full application state.
pub struct App {
    pub ctx: UiContext,
    pub screen: Screen,
    pub session: Option<StoredSession>,
    auth: SessionAuth,
    store: Arc<LogStore>,
    pub sequencer: Sequencer,
    pub dataset: Arc<Dataset>,
    pub scenario: Scenario,
    pub algorithm: Algorithm,
    pub speed: SpeedPreset,
    pub input_mode: InputMode,
    pub target_input: String,
    pub custom_input: String,
    pub auth_field: AuthField,
    pub auth_name: String,
    pub auth_email: String,
    pub carousel_index: usize,
    carousel_ticks: u32,
    pub chat_open: bool,
    pub chat_input: String,
    pub chat_lines: Vec<ChatLine>,
    chat_loaded: bool,
    should_quit: bool,
}

impl App {
    /// Builds the app, restoring any stored session.
    pub fn new(auth: SessionAuth, store: LogStore) -> Result<Self> {
        let session = auth.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load stored session");
            None
        });
        let store = Arc::new(store);
        let user = session
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Anonymous".to_string());
        let reporter: Arc<dyn OutcomeReporter> = store.clone();
        let sequencer = Sequencer::new(reporter, user);

        let scenario = Scenario::default();
        let algorithm = Algorithm::default();
        let dataset = Arc::new(Dataset::generate_default(
            scenario,
            algorithm.requires_sorted(),
        ));
        let screen = if session.is_some() {
            Screen::Home
        } else {
            Screen::Auth
        };

        Ok(Self {
            ctx: UiContext::default(),
            screen,
            session,
            auth,
            store,
            sequencer,
            dataset,
            scenario,
            algorithm,
            speed: SpeedPreset::default(),
            input_mode: InputMode::default(),
            target_input: String::new(),
            custom_input: String::new(),
            auth_field: AuthField::default(),
            auth_name: String::new(),
            auth_email: String::new(),
            carousel_index: 0,
            carousel_ticks: 0,
            chat_open: false,
            chat_input: String::new(),
            chat_lines: Vec::new(),
            chat_loaded: false,
            should_quit: false,
        })
    }

    /// Display name attached to chat and outcome records.
    pub fn user_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Anonymous".to_string())
    }

    /// Drives the UI until quit.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK);

        while !self.should_quit {
            terminal.draw(|frame| views::draw(frame, &self))?;
            tokio::select! {
                _ = tick.tick() => self.on_tick(),
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.on_key(key).await;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event stream error");
                        break;
                    }
                    None => break,
                },
            }
        }
        self.sequencer.cancel();
        Ok(())
    }

    fn on_tick(&mut self) {
        if self.screen == Screen::Home {
            self.carousel_ticks += 1;
            if self.carousel_ticks >= CAROUSEL_ROTATE_TICKS {
                self.carousel_ticks = 0;
                self.carousel_index = (self.carousel_index + 1) % views::home::MISSIONS.len();
            }
        }
    }

    async fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.chat_open {
            self.on_chat_key(key).await;
            return;
        }
        match self.screen {
            Screen::Auth => self.on_auth_key(key),
            Screen::Home => self.on_home_key(key).await,
            Screen::Visualizer => self.on_visualizer_key(key).await,
        }
    }

    // ------------------------------------------------------------------
    // Auth screen
    // ------------------------------------------------------------------

    fn on_auth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.auth_field = match self.auth_field {
                    AuthField::Name => AuthField::Email,
                    AuthField::Email => AuthField::Name,
                };
            }
            KeyCode::Enter => self.submit_auth(),
            KeyCode::Backspace => {
                let field = self.auth_field_mut();
                field.pop();
            }
            KeyCode::Char(c) => self.auth_field_mut().push(c),
            _ => {}
        }
    }

    fn auth_field_mut(&mut self) -> &mut String {
        match self.auth_field {
            AuthField::Name => &mut self.auth_name,
            AuthField::Email => &mut self.auth_email,
        }
    }

    fn submit_auth(&mut self) {
        if self.auth_name.trim().is_empty() {
            self.ctx.play(Cue::Error);
            return;
        }
        let session = StoredSession::issue(self.auth_name.trim(), self.auth_email.trim());
        if let Err(err) = self.auth.save(&session) {
            tracing::warn!(error = %err, "failed to persist session");
        }
        // The sequencer reports as the signed-in commander from now on.
        let reporter: Arc<dyn OutcomeReporter> = self.store.clone();
        self.sequencer = Sequencer::new(reporter, session.name.clone());
        self.session = Some(session);
        self.screen = Screen::Home;
        self.ctx.play(Cue::Success);
    }

    // ------------------------------------------------------------------
    // Home screen
    // ------------------------------------------------------------------

    async fn on_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => {
                self.carousel_index =
                    (self.carousel_index + views::home::MISSIONS.len() - 1)
                        % views::home::MISSIONS.len();
                self.carousel_ticks = 0;
                self.ctx.play(Cue::Click);
            }
            KeyCode::Right => {
                self.carousel_index = (self.carousel_index + 1) % views::home::MISSIONS.len();
                self.carousel_ticks = 0;
                self.ctx.play(Cue::Click);
            }
            KeyCode::Enter => {
                self.algorithm = views::home::MISSIONS[self.carousel_index].algorithm;
                self.regenerate();
                self.screen = Screen::Visualizer;
                self.ctx.play(Cue::Success);
            }
            KeyCode::Char('v') => {
                self.screen = Screen::Visualizer;
                self.ctx.play(Cue::Click);
            }
            KeyCode::Char('c') => self.open_chat().await,
            KeyCode::Char('t') => {
                self.ctx.theme.toggle();
                self.ctx.play(Cue::Toggle);
            }
            KeyCode::Char('m') => self.ctx.muted = !self.ctx.muted,
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Visualizer screen
    // ------------------------------------------------------------------

    async fn on_visualizer_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.on_visualizer_normal_key(key).await,
            InputMode::EditTarget | InputMode::EditCustom => self.on_edit_key(key),
        }
    }

    async fn on_visualizer_normal_key(&mut self, key: KeyEvent) {
        let running = self.sequencer.is_running();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                self.sequencer.cancel();
                self.screen = Screen::Home;
            }
            KeyCode::Char(' ') => {
                if running {
                    self.sequencer.toggle_pause();
                    self.ctx.play(Cue::Click);
                }
            }
            KeyCode::Enter => self.start_search(),
            KeyCode::Char('r') => {
                // Allowed when idle or paused, like the original's
                // reset button.
                if !running || self.sequencer.is_paused() {
                    self.regenerate();
                }
            }
            KeyCode::Char('1') if !running => {
                self.scenario = Scenario::Space;
                self.regenerate();
            }
            KeyCode::Char('2') if !running => {
                self.scenario = Scenario::Contacts;
                self.regenerate();
            }
            KeyCode::Char('3') if !running => {
                self.scenario = Scenario::Attendance;
                self.regenerate();
            }
            KeyCode::Char('l') if !running => {
                self.algorithm = Algorithm::Linear;
                self.regenerate();
            }
            KeyCode::Char('b') if !running => {
                self.algorithm = Algorithm::Binary;
                self.regenerate();
            }
            KeyCode::Char('s') if !running => {
                self.speed = self.speed.next();
                self.ctx.play(Cue::Click);
            }
            KeyCode::Char('i') if !running => self.input_mode = InputMode::EditTarget,
            KeyCode::Char('u') if !running => self.input_mode = InputMode::EditCustom,
            KeyCode::Char('c') => self.open_chat().await,
            KeyCode::Char('t') => {
                self.ctx.theme.toggle();
                self.ctx.play(Cue::Toggle);
            }
            KeyCode::Char('m') => self.ctx.muted = !self.ctx.muted,
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        let editing_custom = self.input_mode == InputMode::EditCustom;
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                if editing_custom {
                    self.load_custom();
                } else {
                    self.start_search();
                }
            }
            KeyCode::Backspace => {
                if editing_custom {
                    self.custom_input.pop();
                } else {
                    self.target_input.pop();
                }
            }
            KeyCode::Char(c) => {
                if editing_custom {
                    self.custom_input.push(c);
                } else {
                    self.target_input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Regenerates the dataset for the current scenario/algorithm and
    /// resets all run state.
    pub fn regenerate(&mut self) {
        self.sequencer.reset();
        self.dataset = Arc::new(Dataset::generate_default(
            self.scenario,
            self.algorithm.requires_sorted(),
        ));
        let mode = self.algorithm.as_str().to_uppercase();
        let status = match self.scenario {
            Scenario::Space => {
                format!("RADAR: New enemy fleet detected. Weapon: {mode} PROTOCOL")
            }
            Scenario::Contacts => format!("DIRECTORY: Loaded contacts. Mode: {mode} SEARCH"),
            Scenario::Attendance => {
                if self.algorithm.requires_sorted() {
                    format!("ATTENDANCE: Teacher sorted the list for {mode} SEARCH!")
                } else {
                    format!("ATTENDANCE: Unsorted class list. Mode: {mode} SEARCH")
                }
            }
        };
        self.sequencer.set_status(status);
        self.target_input.clear();
        self.ctx.play(Cue::Click);
    }

    /// Loads the custom comma-separated dataset, keeping the previous
    /// dataset when the input is unusable.
    fn load_custom(&mut self) {
        match Dataset::parse_custom(&self.custom_input, self.algorithm.requires_sorted()) {
            Ok(dataset) => {
                self.sequencer.reset();
                let len = dataset.len();
                self.dataset = Arc::new(dataset);
                let mode = self.algorithm.as_str().to_uppercase();
                self.sequencer
                    .set_status(format!("CUSTOM DATA: Loaded {len} items. Mode: {mode} SEARCH"));
                self.target_input.clear();
                self.ctx.play(Cue::Click);
            }
            Err(DatasetError::EmptyInput) => {
                self.sequencer
                    .set_status("ERROR: Custom input has no usable entries. Keeping current data.");
                self.ctx.play(Cue::Error);
            }
        }
    }

    fn start_search(&mut self) {
        match self.sequencer.start(
            self.dataset.clone(),
            &self.target_input,
            self.algorithm,
            self.scenario,
            self.speed,
        ) {
            Ok(()) => self.ctx.play(Cue::Click),
            Err(err) => {
                tracing::debug!(error = %err, "search did not start");
                self.sequencer.set_status("ERROR: Invalid Target Value.");
                self.ctx.play(Cue::Error);
            }
        }
    }

    // ------------------------------------------------------------------
    // Chat overlay
    // ------------------------------------------------------------------

    async fn open_chat(&mut self) {
        if !self.chat_loaded {
            self.chat_loaded = true;
            let history = self.store.history().await;
            if history.is_empty() {
                self.chat_lines.push(ChatLine {
                    from_bot: true,
                    text: chat::WELCOME.to_string(),
                });
            } else {
                for record in history {
                    self.chat_lines.push(ChatLine {
                        from_bot: false,
                        text: record.user_message,
                    });
                    self.chat_lines.push(ChatLine {
                        from_bot: true,
                        text: record.bot_response,
                    });
                }
            }
        }
        self.chat_open = true;
        self.ctx.play(Cue::Click);
    }

    async fn on_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.chat_open = false,
            KeyCode::Enter => self.send_chat(),
            KeyCode::Backspace => {
                self.chat_input.pop();
            }
            KeyCode::Char(c) => self.chat_input.push(c),
            _ => {}
        }
    }

    fn send_chat(&mut self) {
        let message = self.chat_input.trim().to_string();
        if message.is_empty() {
            return;
        }
        self.chat_input.clear();
        let reply = chat::respond(&message);
        self.chat_lines.push(ChatLine {
            from_bot: false,
            text: message.clone(),
        });
        self.chat_lines.push(ChatLine {
            from_bot: true,
            text: reply.clone(),
        });
        self.ctx.play(Cue::Success);

        // Persist without blocking the UI; failures only warn.
        let store = self.store.clone();
        let user = self.user_name();
        tokio::spawn(async move {
            store
                .append(ConversationRecord {
                    user,
                    user_message: message,
                    bot_response: reply,
                    timestamp: None,
                })
                .await;
        });
    }
}
