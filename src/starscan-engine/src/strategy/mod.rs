//! Interchangeable stepping policies.
//!
//! Each strategy consumes the dataset and target through a
//! [`StepContext`] and drives the run step by step; adding a new
//! algorithm means adding an implementation here, the sequencer is
//! untouched.

mod binary;
mod linear;
mod voice;

use async_trait::async_trait;
use starscan_protocol::Algorithm;

pub use binary::BinaryScan;
pub use linear::LinearScan;

use crate::sequencer::StepContext;

/// How a run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// Target matched at `index`; a success outcome is recorded.
    Found { index: usize },
    /// The search space was exhausted; a failure outcome is recorded.
    Exhausted,
    /// Cancelled at a suspension point; nothing is recorded.
    Cancelled,
}

/// One stepping policy.
#[async_trait]
pub trait SearchStrategy: Send + Sync {
    /// Which algorithm this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Whether the dataset must be sorted ascending first.
    fn requires_sorted(&self) -> bool {
        self.algorithm().requires_sorted()
    }

    /// Drives the run to completion or cancellation. All visible
    /// mutation goes through `ctx.commit`; pause/cancel are honored at
    /// every suspension point.
    async fn run(&self, ctx: &StepContext) -> RunEnd;
}

/// Policy lookup for a selector.
pub fn strategy_for(algorithm: Algorithm) -> Box<dyn SearchStrategy> {
    match algorithm {
        Algorithm::Linear => Box::new(LinearScan),
        Algorithm::Binary => Box::new(BinaryScan),
    }
}
