//! OS-aware path detection.
//!
//! - **Windows**: `%APPDATA%\starscan\`
//! - **macOS**: `~/Library/Application Support/starscan/`
//! - **Linux**: `~/.local/share/starscan/`
//!
//! `STARSCAN_DATA_DIR` overrides the detected location.

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Application name used for storage directories.
pub const APP_NAME: &str = "starscan";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "STARSCAN_DATA_DIR";

/// File names under the data directory.
pub const SEARCH_LOG_FILE: &str = "search_logs.jsonl";
pub const CHAT_LOG_FILE: &str = "chat_logs.jsonl";
pub const SESSION_FILE: &str = "session.json";
pub const LOG_DIR: &str = "logs";

/// Resolved storage locations.
#[derive(Debug, Clone)]
pub struct StarscanPaths {
    /// Root data directory (platform-specific).
    pub data_dir: PathBuf,
}

impl StarscanPaths {
    /// Detects paths, honoring the `STARSCAN_DATA_DIR` override.
    pub fn new() -> Result<Self> {
        Ok(Self {
            data_dir: starscan_data_dir()?,
        })
    }

    /// Paths rooted at an explicit directory (tests, portable mode).
    pub fn with_root(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates the data directory tree if missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.data_dir.join(LOG_DIR))?;
        Ok(())
    }

    pub fn search_log_file(&self) -> PathBuf {
        self.data_dir.join(SEARCH_LOG_FILE)
    }

    pub fn chat_log_file(&self) -> PathBuf {
        self.data_dir.join(CHAT_LOG_FILE)
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    /// Directory for diagnostic log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR)
    }
}

/// The platform data directory for starscan.
pub fn starscan_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or(StorageError::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_data_dir() {
        let paths = StarscanPaths::with_root("/tmp/starscan-test");
        assert!(paths.search_log_file().ends_with(SEARCH_LOG_FILE));
        assert!(paths.chat_log_file().starts_with(&paths.data_dir));
        assert!(paths.session_file().starts_with(&paths.data_dir));
    }
}
