//! Argument parsing and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use starscan_storage::{LogStore, SessionAuth};

use crate::{history, login};

/// Animated search-algorithm visualizer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "starscan", version, about)]
pub struct Cli {
    /// Log at debug level instead of info.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with a commander name.
    Login {
        /// Display name attached to runs and chat messages.
        name: String,
        /// Contact address, informational only.
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove the stored session.
    Logout,
    /// Show the current session identity.
    Whoami,
    /// Show recorded run outcomes (or chat exchanges with --chat).
    History {
        /// Show the chat transcript instead of run outcomes.
        #[arg(long)]
        chat: bool,
        /// Number of most recent entries to show.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

/// Executes the parsed command; no subcommand launches the TUI.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            let auth = SessionAuth::new()?;
            let store = LogStore::new()?;
            starscan_tui::run(auth, store).await
        }
        Some(Commands::Login { name, email }) => {
            login::run_login(&SessionAuth::new()?, &name, email.as_deref())
        }
        Some(Commands::Logout) => login::run_logout(&SessionAuth::new()?),
        Some(Commands::Whoami) => login::run_whoami(&SessionAuth::new()?),
        Some(Commands::History { chat, limit }) => {
            let store = LogStore::new()?;
            if chat {
                history::run_chat(&store, limit).await
            } else {
                history::run_outcomes(&store, limit).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn history_defaults_to_twenty_outcomes() {
        let cli = Cli::parse_from(["starscan", "history"]);
        match cli.command {
            Some(Commands::History { chat, limit }) => {
                assert!(!chat);
                assert_eq!(limit, 20);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn login_accepts_optional_email() {
        let cli = Cli::parse_from(["starscan", "login", "Commander", "--email", "c@f.example"]);
        match cli.command {
            Some(Commands::Login { name, email }) => {
                assert_eq!(name, "Commander");
                assert_eq!(email.as_deref(), Some("c@f.example"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
