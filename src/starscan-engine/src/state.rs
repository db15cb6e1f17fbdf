//! Per-step visual and resource state.
//!
//! `StepState` is the snapshot the projector and the UI read between
//! steps. It is overwritten every step and fully reset at run start,
//! dataset regeneration and explicit reset - never partially stale.

use std::collections::BTreeSet;

/// Energy available at the start of every run.
pub const MAX_ENERGY: u32 = 1000;

/// Status line shown before any run has started.
pub const IDLE_STATUS: &str = "Awaiting parameters...";

/// Transient state committed once per step by the sequencer's run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepState {
    /// Index currently being examined, if any.
    pub active: Option<usize>,
    /// Terminal match index. Takes total render precedence once set.
    pub found: Option<usize>,
    /// Indices eliminated by prior halving steps. Grows monotonically
    /// during a run.
    pub discarded: BTreeSet<usize>,
    /// Inclusive index range still under consideration (halving only).
    pub bounds: Option<(usize, usize)>,
    /// Steps taken so far in this run.
    pub steps: u32,
    /// Human-readable description of the current step.
    pub status: String,
    /// Remaining energy in `0..=MAX_ENERGY`. Forced to zero on failure.
    pub energy: u32,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            active: None,
            found: None,
            discarded: BTreeSet::new(),
            bounds: None,
            steps: 0,
            status: IDLE_STATUS.to_string(),
            energy: MAX_ENERGY,
        }
    }
}

impl StepState {
    /// Returns to the initial state (full energy, no markings).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Consumes energy, clamping at zero.
    pub fn deplete(&mut self, amount: u32) {
        self.energy = self.energy.saturating_sub(amount);
    }

    /// Marks `lo..=hi` as discarded.
    pub fn discard_range(&mut self, lo: usize, hi: usize) {
        self.discarded.extend(lo..=hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deplete_clamps_at_zero() {
        let mut state = StepState::default();
        state.deplete(MAX_ENERGY + 500);
        assert_eq!(state.energy, 0);
    }

    #[test]
    fn clear_restores_defaults() {
        let mut state = StepState::default();
        state.steps = 7;
        state.active = Some(3);
        state.discard_range(0, 4);
        state.deplete(300);
        state.clear();
        assert_eq!(state, StepState::default());
    }

    #[test]
    fn discard_range_is_inclusive() {
        let mut state = StepState::default();
        state.discard_range(2, 4);
        assert_eq!(
            state.discarded.iter().copied().collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }
}
