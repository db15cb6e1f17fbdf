//! Chat overlay: canned-response Star-Command AI on top of any screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::app::App;
use crate::views::popup_area;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.ctx.theme;
    let area = popup_area(frame.area(), 60, 70);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" STAR-COMMAND AI ")
        .title_bottom(Line::from(" Enter send | Esc close ").right_aligned())
        .style(Style::new().fg(theme.accent()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [log_area, input_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(inner);

    // Tail of the transcript; older lines scroll away.
    let visible = log_area.height as usize;
    let lines: Vec<Line> = app
        .chat_lines
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|line| {
            if line.from_bot {
                Line::styled(
                    format!("AI> {}", line.text),
                    Style::new().fg(theme.accent()),
                )
            } else {
                Line::styled(
                    format!("YOU> {}", line.text),
                    Style::new().fg(theme.fg()).add_modifier(Modifier::BOLD),
                )
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), log_area);

    frame.render_widget(
        Paragraph::new(app.chat_input.clone())
            .block(Block::bordered().title(" Message ").style(Style::new().fg(theme.fg()))),
        input_area,
    );
}
