//! Error types for the search engine.

use thiserror::Error;

/// Errors surfaced to the caller when starting a run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The raw target cannot be coerced to the dataset's comparable
    /// type: numeric parse failure, or empty string after trimming.
    #[error("invalid target {0:?} for this dataset")]
    InvalidTarget(String),
}

/// Errors from custom dataset parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// The delimited input yielded zero usable entries. The previous
    /// dataset is retained.
    #[error("custom input contained no usable entries")]
    EmptyInput,
}
