//! Halving scan over a sorted dataset.

use std::cmp::Ordering;

use async_trait::async_trait;
use starscan_protocol::Algorithm;

use super::{RunEnd, SearchStrategy, voice};
use crate::sequencer::StepContext;

/// Per-iteration energy cost of a halving step.
const STEP_COST: u32 = 20;

/// Halving scan. Requires the dataset sorted ascending by comparable
/// value; matches the first midpoint that equals the target.
pub struct BinaryScan;

#[async_trait]
impl SearchStrategy for BinaryScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Binary
    }

    async fn run(&self, ctx: &StepContext) -> RunEnd {
        let items = ctx.dataset().items();
        let mut left: isize = 0;
        let mut right: isize = items.len() as isize - 1;

        while left <= right {
            if !ctx.pause_gate().await {
                return RunEnd::Cancelled;
            }
            let (l, r) = (left as usize, right as usize);
            ctx.commit(|state| {
                state.steps += 1;
                state.bounds = Some((l, r));
                state.deplete(STEP_COST);
                state.status = voice::narrowing(ctx.scenario(), l, r);
            });
            if !ctx.suspend().await {
                return RunEnd::Cancelled;
            }

            let mid = ((left + right) / 2) as usize;
            ctx.commit(|state| {
                state.active = Some(mid);
                state.status = voice::probing(ctx.scenario(), mid);
            });
            // The probe lingers longer than a regular step so the jump
            // reads as probe-then-compare.
            if !ctx.suspend_probe().await {
                return RunEnd::Cancelled;
            }

            match items[mid].compare.cmp(ctx.target()) {
                Ordering::Equal => {
                    ctx.commit(|state| {
                        state.found = Some(mid);
                        state.status = voice::found(ctx.scenario(), mid);
                    });
                    return RunEnd::Found { index: mid };
                }
                Ordering::Less => {
                    ctx.commit(|state| {
                        state.discard_range(l, mid);
                        state.status = voice::discard_low(ctx.scenario(), mid);
                    });
                    left = mid as isize + 1;
                }
                Ordering::Greater => {
                    ctx.commit(|state| {
                        state.discard_range(mid, r);
                        state.status = voice::discard_high(ctx.scenario(), mid);
                    });
                    right = mid as isize - 1;
                }
            }
            if !ctx.suspend().await {
                return RunEnd::Cancelled;
            }
        }

        ctx.commit(|state| {
            state.active = None;
            state.bounds = None;
            state.energy = 0;
            state.status = voice::binary_failed(ctx.scenario());
        });
        RunEnd::Exhausted
    }
}
