//! External store contracts.
//!
//! The engine talks to the outcome and conversation stores only
//! through these traits. Writes are best-effort telemetry: a failed
//! append must never affect run completion or the visible status line,
//! so implementations log failures and move on, and callers never
//! retry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::selectors::Algorithm;
use crate::value::Value;

/// One completed (found or failed) run. Cancelled runs produce no record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    /// Display name of the signed-in user, or `"Anonymous"`.
    pub user: String,
    /// `"linear"` or `"binary"`.
    pub algorithm: Algorithm,
    /// The coerced target value the scan looked for.
    pub target: Value,
    /// Whether the target was found.
    pub success: bool,
    /// Energy left when the run terminated; zero on failure.
    pub energy_remaining: u32,
    /// Assigned by the store at append time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl OutcomeRecord {
    /// Builds a record without a timestamp; the store fills it in.
    pub fn new(
        user: impl Into<String>,
        algorithm: Algorithm,
        target: Value,
        success: bool,
        energy_remaining: u32,
    ) -> Self {
        Self {
            user: user.into(),
            algorithm,
            target,
            success,
            energy_remaining,
            timestamp: None,
        }
    }
}

/// One chat exchange: the user's message and the generated reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    /// Display name of the signed-in user, or `"Anonymous"`.
    pub user: String,
    /// What the user typed.
    pub user_message: String,
    /// The canned reply that was shown.
    pub bot_response: String,
    /// Assigned by the store at append time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Append-only sink for run outcomes.
#[async_trait]
pub trait OutcomeReporter: Send + Sync {
    /// Appends one outcome record. Implementations assign the timestamp.
    async fn report(&self, record: OutcomeRecord);
}

/// Append-only sink plus ordered replay for chat exchanges.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Appends one exchange. Implementations assign the timestamp.
    async fn append(&self, record: ConversationRecord);

    /// All prior exchanges ordered by timestamp.
    async fn history(&self) -> Vec<ConversationRecord>;
}

/// Reporter that drops everything. Used when no store is configured
/// and in engine tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

#[async_trait]
impl OutcomeReporter for NullReporter {
    async fn report(&self, _record: OutcomeRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outcome_record_serializes_camel_case() {
        let record = OutcomeRecord::new(
            "Commander",
            Algorithm::Binary,
            Value::number(8.0),
            true,
            960,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["algorithm"], "binary");
        assert_eq!(json["energyRemaining"], 960);
        assert_eq!(json["target"], 8.0);
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn conversation_record_round_trips() {
        let record = ConversationRecord {
            user: "Anonymous".into(),
            user_message: "what is linear search".into(),
            bot_response: "Linear Search checks every single element one by one.".into(),
            timestamp: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ConversationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
