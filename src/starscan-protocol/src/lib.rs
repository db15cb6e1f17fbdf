//! Starscan Protocol - Shared types between the search engine and its collaborators.
//!
//! This crate defines the comparable value model, the run selectors
//! (algorithm, scenario, speed preset) and the append-only record types
//! accepted by the external outcome/conversation stores.

pub mod report;
pub mod selectors;
pub mod value;

// Re-exports
pub use report::{ConversationRecord, ConversationStore, OutcomeRecord, OutcomeReporter};
pub use selectors::{Algorithm, Scenario, SpeedPreset};
pub use value::Value;
