//! Visual state projection: pure derivation from a committed snapshot
//! to per-item render attributes. No side effects, recomputed on every
//! state change.

use starscan_protocol::Algorithm;

use crate::state::StepState;

/// Render attribute of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    /// Terminal match highlight.
    Found,
    /// Currently under examination.
    Active,
    /// Eliminated (discarded, outside bounds, or everything-but-found).
    Dimmed,
    /// Default resting color.
    Idle,
}

/// Derives the render attribute for `index`.
///
/// Found state takes total precedence: once a match is set, every other
/// index is dimmed regardless of its flags. Bounds dimming applies only
/// to the halving scan.
pub fn project(index: usize, state: &StepState, algorithm: Algorithm) -> BarState {
    if let Some(found) = state.found {
        return if index == found {
            BarState::Found
        } else {
            BarState::Dimmed
        };
    }
    if state.active == Some(index) {
        return BarState::Active;
    }
    if state.discarded.contains(&index) {
        return BarState::Dimmed;
    }
    if algorithm == Algorithm::Binary
        && let Some((left, right)) = state.bounds
        && (index < left || index > right)
    {
        return BarState::Dimmed;
    }
    BarState::Idle
}
