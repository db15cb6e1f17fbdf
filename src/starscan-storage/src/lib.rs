//! Starscan Storage - OS-aware persistence for the visualizer.
//!
//! Two concerns live here, both treated by the core as external
//! collaborators:
//!
//! - **Append-only logs** ([`LogStore`]): completed-run outcomes and
//!   chat exchanges as JSONL, implementing the reporter traits from
//!   `starscan-protocol`. Writes are best-effort; failures are logged
//!   and never surfaced or retried.
//! - **Session persistence** ([`auth`]): the opaque session token and
//!   display name that gate the protected views.

pub mod auth;
pub mod error;
pub mod logs;
pub mod paths;

pub use auth::{SessionAuth, StoredSession};
pub use error::{Result, StorageError};
pub use logs::LogStore;
pub use paths::{StarscanPaths, starscan_data_dir};
