//! `history` subcommand: replay recorded outcomes or chat exchanges.

use anyhow::Result;
use starscan_protocol::ConversationStore;
use starscan_storage::LogStore;

use crate::styled::{print_dim, print_info};

fn format_time(timestamp: Option<chrono::DateTime<chrono::Utc>>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Prints the most recent `limit` run outcomes, oldest first.
pub async fn run_outcomes(store: &LogStore, limit: usize) -> Result<()> {
    let records = store.search_history().await;
    if records.is_empty() {
        print_info("No recorded runs yet.");
        return Ok(());
    }
    let skip = records.len().saturating_sub(limit);
    for record in records.into_iter().skip(skip) {
        let verdict = if record.success { "HIT " } else { "MISS" };
        println!(
            "{}  {}  {:>6}  target={}  energy={}  by {}",
            format_time(record.timestamp),
            verdict,
            record.algorithm.as_str(),
            record.target,
            record.energy_remaining,
            record.user,
        );
    }
    Ok(())
}

/// Prints the most recent `limit` chat exchanges, oldest first.
pub async fn run_chat(store: &LogStore, limit: usize) -> Result<()> {
    let records = store.history().await;
    if records.is_empty() {
        print_info("No recorded chat exchanges yet.");
        return Ok(());
    }
    let skip = records.len().saturating_sub(limit);
    for record in records.into_iter().skip(skip) {
        print_dim(&format!(
            "{}  {}",
            format_time(record.timestamp),
            record.user
        ));
        println!("  > {}", record.user_message);
        println!("  < {}", record.bot_response);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starscan_protocol::{Algorithm, OutcomeRecord, OutcomeReporter, Value};
    use starscan_storage::StarscanPaths;
    use tempfile::TempDir;

    #[tokio::test]
    async fn printing_history_never_fails_on_empty_or_full_stores() {
        let dir = TempDir::new().unwrap();
        let store = LogStore::with_paths(StarscanPaths::with_root(dir.path())).unwrap();
        run_outcomes(&store, 20).await.unwrap();
        run_chat(&store, 20).await.unwrap();

        store
            .report(OutcomeRecord::new(
                "Commander",
                Algorithm::Linear,
                Value::number(8.0),
                true,
                400,
            ))
            .await;
        run_outcomes(&store, 20).await.unwrap();
    }
}
