//! Sign-in form: name and email, Enter to mint a session.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, AuthField};
use crate::views::popup_area;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.ctx.theme;
    let area = popup_area(frame.area(), 50, 50);

    let block = Block::bordered()
        .title(" STARSCAN // IDENTIFY YOURSELF ")
        .style(Style::new().fg(theme.accent()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, name_area, email_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let field = |label: &'static str, value: &str, focused: bool| {
        let style = if focused {
            Style::new().fg(theme.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.fg())
        };
        Paragraph::new(value.to_string()).block(Block::bordered().title(label).style(style))
    };

    frame.render_widget(
        field(
            " Commander name ",
            &app.auth_name,
            app.auth_field == AuthField::Name,
        ),
        name_area,
    );
    frame.render_widget(
        field(
            " Email (optional) ",
            &app.auth_email,
            app.auth_field == AuthField::Email,
        ),
        email_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::new().fg(theme.accent())),
            Span::raw(" switch  "),
            Span::styled("Enter", Style::new().fg(theme.accent())),
            Span::raw(" sign in  "),
            Span::styled("Esc", Style::new().fg(theme.danger())),
            Span::raw(" quit"),
        ]))
        .centered(),
        hint_area,
    );
}
