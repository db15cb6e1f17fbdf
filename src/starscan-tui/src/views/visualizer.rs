//! The visualizer: bar field, HUD, status line and input row.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Gauge, Paragraph};
use starscan_engine::{MAX_ENERGY, project};

use crate::app::{App, InputMode};

/// Energy at or below which the gauge turns to the danger color.
const LOW_ENERGY: u32 = 300;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.ctx.theme;
    let snapshot = app.sequencer.snapshot();

    let [selector_area, bars_area, hud_area, status_area, input_area, hint_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    // Selector strip: scenario, protocol, speed.
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("DATASET ", Style::new().fg(theme.fg())),
            Span::styled(
                app.scenario.label(),
                Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  PROTOCOL ", Style::new().fg(theme.fg())),
            Span::styled(
                app.algorithm.as_str().to_uppercase(),
                Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  SPEED ", Style::new().fg(theme.fg())),
            Span::styled(
                app.speed.label(),
                Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD),
            ),
        ]))
        .centered(),
        selector_area,
    );

    // Bar field.
    let items = app.dataset.items();
    let len = items.len().max(1) as u16;
    let bar_width = (bars_area.width.saturating_sub(2) / len)
        .saturating_sub(1)
        .clamp(1, 7);
    let bars: Vec<Bar> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let color = theme.bar_color(project(index, &snapshot, app.algorithm));
            let mut display = item.display.clone();
            display.truncate(bar_width as usize);
            Bar::default()
                .value(item.height)
                .text_value(display)
                .style(Style::new().fg(color))
        })
        .collect();
    frame.render_widget(
        BarChart::default()
            .block(Block::bordered().style(Style::new().fg(theme.fg())))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1),
        bars_area,
    );

    // HUD: energy gauge plus step counter.
    let [gauge_area, steps_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(16)]).areas(hud_area);
    let energy_color = if snapshot.energy > LOW_ENERGY {
        ratatui::style::Color::Green
    } else {
        theme.danger()
    };
    frame.render_widget(
        Gauge::default()
            .block(Block::bordered().title(" ENERGY "))
            .gauge_style(Style::new().fg(energy_color))
            .ratio(f64::from(snapshot.energy) / f64::from(MAX_ENERGY))
            .label(format!("{}/{}", snapshot.energy, MAX_ENERGY)),
        gauge_area,
    );
    frame.render_widget(
        Paragraph::new(format!("{}", snapshot.steps))
            .centered()
            .block(Block::bordered().title(" STEPS ")),
        steps_area,
    );

    // Status line; the run loop owns this text during a run.
    let mut status = snapshot.status;
    if app.sequencer.is_paused() {
        status.push_str("  [PAUSED]");
    }
    let status_style = if status.starts_with("ERROR") {
        Style::new().fg(theme.danger()).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(theme.accent())
    };
    frame.render_widget(Paragraph::new(status).style(status_style).centered(), status_area);

    // Target and custom-data inputs.
    let [target_area, custom_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .areas(input_area);
    let input = |title: &'static str, value: &str, editing: bool| {
        let style = if editing {
            Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.fg())
        };
        Paragraph::new(value.to_string()).block(Block::bordered().title(title).style(style))
    };
    frame.render_widget(
        input(
            " Target (i) ",
            &app.target_input,
            app.input_mode == InputMode::EditTarget,
        ),
        target_area,
    );
    frame.render_widget(
        input(
            " Custom data, comma-separated (u) ",
            &app.custom_input,
            app.input_mode == InputMode::EditCustom,
        ),
        custom_area,
    );

    frame.render_widget(hints(app), hint_area);
}

fn hints(app: &App) -> Paragraph<'static> {
    let theme = app.ctx.theme;
    let key = |k: &'static str| Span::styled(k, Style::new().fg(theme.accent()));
    let line = if app.input_mode != InputMode::Normal {
        Line::from(vec![
            key("Enter"),
            Span::raw(" apply  "),
            key("Esc"),
            Span::raw(" cancel edit"),
        ])
    } else if app.sequencer.is_running() {
        Line::from(vec![
            key("Space"),
            Span::raw(" pause/resume  "),
            key("r"),
            Span::raw(" reset (paused)  "),
            key("Esc"),
            Span::raw(" abort to home"),
        ])
    } else {
        Line::from(vec![
            key("Enter"),
            Span::raw(" scan  "),
            key("1/2/3"),
            Span::raw(" dataset  "),
            key("l/b"),
            Span::raw(" protocol  "),
            key("s"),
            Span::raw(" speed  "),
            key("r"),
            Span::raw(" new data  "),
            key("i/u"),
            Span::raw(" edit  "),
            key("c"),
            Span::raw(" chat  "),
            key("t"),
            Span::raw(" theme  "),
            key("q"),
            Span::raw(" quit"),
        ])
    };
    Paragraph::new(line).centered()
}
