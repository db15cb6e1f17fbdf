//! Starscan TUI - terminal frontend for the animated-search engine.
//!
//! Screens:
//! - **Auth**: name/email entry minting the opaque session token.
//! - **Home**: rotating mission carousel, launches a visualizer run.
//! - **Visualizer**: the bar field, HUD (steps + energy), status line
//!   and run controls.
//! - **Chat** overlay: canned-response Star-Command AI with persisted
//!   history.
//!
//! Theme and audio state travel in an explicit [`UiContext`] handed to
//! the draw functions; there is no ambient global UI state.

pub mod app;
pub mod context;
pub mod views;

pub use app::App;
pub use context::{Theme, UiContext};

use anyhow::Result;
use starscan_storage::{LogStore, SessionAuth};

/// Runs the TUI until the user quits.
pub async fn run(auth: SessionAuth, store: LogStore) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(auth, store)?.run(terminal).await;
    ratatui::restore();
    result
}
