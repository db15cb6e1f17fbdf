//! Draw functions. Pure renderers over [`App`] state.

pub mod auth;
pub mod chat;
pub mod home;
pub mod visualizer;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::app::{App, Screen};

/// Top-level dispatch: one screen plus the optional chat overlay.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Auth => auth::draw(frame, app),
        Screen::Home => home::draw(frame, app),
        Screen::Visualizer => visualizer::draw(frame, app),
    }
    if app.chat_open {
        chat::draw(frame, app);
    }
}

/// Centered sub-area of `area` sized by percentage.
pub(crate) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn popup_area_is_centered_and_contained() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = popup_area(outer, 60, 50);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert!(inner.x > outer.x && inner.y > outer.y);
        assert!(inner.right() <= outer.right() && inner.bottom() <= outer.bottom());
    }
}
