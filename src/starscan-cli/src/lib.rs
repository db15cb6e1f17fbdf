//! Starscan CLI library.
//!
//! - `cli` - argument parsing and command dispatch
//! - `login` - session subcommands (login/logout/whoami)
//! - `history` - recorded outcome and chat transcripts
//! - `logging` - file-based diagnostic logging setup
//! - `styled` - small helpers for colored terminal output

pub mod cli;
pub mod history;
pub mod logging;
pub mod login;
pub mod styled;
