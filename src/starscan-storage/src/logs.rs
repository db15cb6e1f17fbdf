//! Append-only JSONL logs for run outcomes and chat exchanges.
//!
//! `LogStore` stands in for the remote store the original system wrote
//! to. The engine treats it as fire-and-forget telemetry: append
//! failures are warn-logged for diagnostics and never propagated,
//! retried, or shown on the status line.

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use async_trait::async_trait;
use starscan_protocol::{ConversationRecord, ConversationStore, OutcomeRecord, OutcomeReporter};

use crate::error::Result;
use crate::paths::StarscanPaths;

/// JSONL-backed outcome and conversation store.
#[derive(Debug, Clone)]
pub struct LogStore {
    paths: StarscanPaths,
}

impl LogStore {
    /// Opens the store at the detected platform location.
    pub fn new() -> Result<Self> {
        let paths = StarscanPaths::new()?;
        paths.ensure_dirs()?;
        Ok(Self { paths })
    }

    /// Opens the store rooted at an explicit directory.
    pub fn with_paths(paths: StarscanPaths) -> Result<Self> {
        paths.ensure_dirs()?;
        Ok(Self { paths })
    }

    /// All recorded run outcomes ordered by timestamp.
    pub async fn search_history(&self) -> Vec<OutcomeRecord> {
        let mut records: Vec<OutcomeRecord> = self.read_lines(&self.paths.search_log_file()).await;
        records.sort_by_key(|r| r.timestamp);
        records
    }

    async fn append_line(&self, path: &std::path::Path, line: String) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }

    async fn read_lines<T: serde::de::DeserializeOwned>(&self, path: &std::path::Path) -> Vec<T> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read log file");
                return Vec::new();
            }
        };
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping malformed log line");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl OutcomeReporter for LogStore {
    async fn report(&self, mut record: OutcomeRecord) {
        record.timestamp = Some(Utc::now());
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to serialize outcome record");
                return;
            }
        };
        if let Err(err) = self.append_line(&self.paths.search_log_file(), line).await {
            warn!(error = %err, "failed to append outcome record");
        }
    }
}

#[async_trait]
impl ConversationStore for LogStore {
    async fn append(&self, mut record: ConversationRecord) {
        record.timestamp = Some(Utc::now());
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to serialize conversation record");
                return;
            }
        };
        if let Err(err) = self.append_line(&self.paths.chat_log_file(), line).await {
            warn!(error = %err, "failed to append conversation record");
        }
    }

    async fn history(&self) -> Vec<ConversationRecord> {
        let mut records: Vec<ConversationRecord> =
            self.read_lines(&self.paths.chat_log_file()).await;
        records.sort_by_key(|r| r.timestamp);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use starscan_protocol::{Algorithm, Value};
    use tempfile::TempDir;

    fn store() -> (LogStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = LogStore::with_paths(StarscanPaths::with_root(dir.path())).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn outcomes_are_appended_with_timestamps() {
        let (store, _dir) = store();
        store
            .report(OutcomeRecord::new(
                "Commander",
                Algorithm::Linear,
                Value::number(8.0),
                true,
                400,
            ))
            .await;
        store
            .report(OutcomeRecord::new(
                "Commander",
                Algorithm::Binary,
                Value::number(4.0),
                false,
                0,
            ))
            .await;

        let history = store.search_history().await;
        assert_eq!(history.len(), 2);
        assert!(history[0].timestamp.is_some());
        assert_eq!(history[0].algorithm, Algorithm::Linear);
        assert_eq!(history[1].algorithm, Algorithm::Binary);
        assert!(history[0].timestamp <= history[1].timestamp);
    }

    #[tokio::test]
    async fn chat_history_replays_in_timestamp_order() {
        let (store, _dir) = store();
        for (question, answer) in [("hi", "Greetings"), ("what is linear", "Linear Search...")] {
            store
                .append(ConversationRecord {
                    user: "Anonymous".into(),
                    user_message: question.into(),
                    bot_response: answer.into(),
                    timestamp: None,
                })
                .await;
        }

        let history = store.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user_message, "hi");
        assert_eq!(history[1].user_message, "what is linear");
    }

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let (store, _dir) = store();
        assert!(store.search_history().await.is_empty());
        assert!(store.history().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped() {
        let (store, dir) = store();
        tokio::fs::write(
            dir.path().join(crate::paths::CHAT_LOG_FILE),
            "not json\n{\"user\":\"a\",\"userMessage\":\"q\",\"botResponse\":\"r\"}\n",
        )
        .await
        .unwrap();
        let history = store.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "q");
    }
}
