//! Starscan Engine - the animated-search core.
//!
//! This crate owns everything with real state-machine logic:
//!
//! - [`dataset`] - scenario and custom dataset generation
//! - [`control`] - run/pause/cancel flags with cooperative suspension
//! - [`state`] - the per-step visual/resource snapshot
//! - [`sequencer`] - the pausable, cancelable run driver
//! - [`strategy`] - the sequential and halving stepping policies
//! - [`projector`] - pure snapshot-to-render-attribute derivation
//! - [`chat`] - the canned-response generator
//!
//! The engine reports completed runs through the
//! [`starscan_protocol::OutcomeReporter`] seam; everything outside that
//! seam (persistence, identity, UI) lives in the sibling crates.

pub mod chat;
pub mod control;
pub mod dataset;
pub mod error;
pub mod projector;
pub mod sequencer;
pub mod state;
pub mod strategy;

pub use control::RunControl;
pub use dataset::{Dataset, Item, ValueKind};
pub use error::{DatasetError, EngineError};
pub use projector::{BarState, project};
pub use sequencer::Sequencer;
pub use state::{MAX_ENERGY, StepState};
