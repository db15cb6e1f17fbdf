//! Home screen: greeting plus the auto-rotating mission carousel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use starscan_protocol::Algorithm;

use crate::app::App;
use crate::views::popup_area;

/// One carousel card.
pub struct Mission {
    pub title: &'static str,
    pub tagline: &'static str,
    pub briefing: &'static str,
    pub algorithm: Algorithm,
}

/// Carousel rotation order.
pub const MISSIONS: [Mission; 2] = [
    Mission {
        title: "OPERATION: SECTOR SWEEP",
        tagline: "Linear protocol",
        briefing: "Sweep the enemy fleet sector by sector, firing at every \
                   contact until the flagship is found or the grid runs out.",
        algorithm: Algorithm::Linear,
    },
    Mission {
        title: "OPERATION: HYPER-JUMP",
        tagline: "Binary protocol",
        briefing: "Lock onto the sorted sector grid and halve it with every \
                   hyper-jump until the target has nowhere left to hide.",
        algorithm: Algorithm::Binary,
    },
];

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.ctx.theme;
    let [banner_area, card_outer, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let greeting = format!("Welcome back, Commander {}", app.user_name());
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                "S T A R S C A N",
                Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD),
            ),
            Line::styled(greeting, Style::new().fg(theme.fg())),
        ])
        .centered(),
        banner_area,
    );

    let mission = &MISSIONS[app.carousel_index];
    let card_area = popup_area(card_outer, 60, 70);
    let indicator = format!(" {} / {} ", app.carousel_index + 1, MISSIONS.len());
    let block = Block::bordered()
        .title(format!(" {} ", mission.title))
        .title_bottom(Line::from(indicator).centered())
        .style(Style::new().fg(theme.accent()));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                mission.tagline,
                Style::new().fg(theme.fg()).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(mission.briefing, Style::new().fg(theme.fg())),
        ])
        .wrap(Wrap { trim: true }),
        inner,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{2190}/\u{2192}", Style::new().fg(theme.accent())),
            Span::raw(" missions  "),
            Span::styled("Enter", Style::new().fg(theme.accent())),
            Span::raw(" launch  "),
            Span::styled("c", Style::new().fg(theme.accent())),
            Span::raw(" chat  "),
            Span::styled("t", Style::new().fg(theme.accent())),
            Span::raw(" theme  "),
            Span::styled("m", Style::new().fg(theme.accent())),
            Span::raw(" mute  "),
            Span::styled("q", Style::new().fg(theme.danger())),
            Span::raw(" quit"),
        ]))
        .centered(),
        hint_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_covers_both_protocols() {
        assert_eq!(MISSIONS.len(), 2);
        assert_eq!(MISSIONS[0].algorithm, Algorithm::Linear);
        assert_eq!(MISSIONS[1].algorithm, Algorithm::Binary);
    }
}
