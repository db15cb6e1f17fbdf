//! Explicit UI context: theme palette and audio cues.
//!
//! Passed to every draw function instead of living in globals, so the
//! views stay pure functions of state + context.

use std::io::Write;

use ratatui::style::Color;
use starscan_engine::BarState;

/// Day/night palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Night,
    Day,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Night => Theme::Day,
            Theme::Day => Theme::Night,
        };
    }

    /// Default foreground.
    pub fn fg(&self) -> Color {
        match self {
            Theme::Night => Color::Cyan,
            Theme::Day => Color::Black,
        }
    }

    /// Accent for headings and active controls.
    pub fn accent(&self) -> Color {
        match self {
            Theme::Night => Color::LightCyan,
            Theme::Day => Color::Blue,
        }
    }

    /// Danger/error accent.
    pub fn danger(&self) -> Color {
        Color::Red
    }

    /// Bar color for a projected render state.
    pub fn bar_color(&self, state: BarState) -> Color {
        match state {
            BarState::Found => Color::Green,
            BarState::Active => Color::Yellow,
            BarState::Dimmed => Color::DarkGray,
            BarState::Idle => match self {
                Theme::Night => Color::Cyan,
                Theme::Day => Color::Blue,
            },
        }
    }
}

/// Audio cue kinds. All render as the terminal bell; the distinction
/// exists so a richer backend could map them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Success,
    Error,
    Toggle,
}

/// Theme + audio state handed to the views.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiContext {
    pub theme: Theme,
    pub muted: bool,
}

impl UiContext {
    /// Emits an audio cue unless muted. Terminal bell only; headless
    /// terminals simply ignore it.
    pub fn play(&self, _cue: Cue) {
        if self.muted {
            return;
        }
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_toggles_between_palettes() {
        let mut theme = Theme::Night;
        theme.toggle();
        assert_eq!(theme, Theme::Day);
        theme.toggle();
        assert_eq!(theme, Theme::Night);
    }

    #[test]
    fn found_bars_are_green_in_both_themes() {
        for theme in [Theme::Night, Theme::Day] {
            assert_eq!(theme.bar_color(BarState::Found), Color::Green);
            assert_eq!(theme.bar_color(BarState::Dimmed), Color::DarkGray);
        }
    }
}
