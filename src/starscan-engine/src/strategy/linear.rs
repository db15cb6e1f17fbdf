//! Sequential scan: examine indices `0..N-1` in order.

use async_trait::async_trait;
use starscan_protocol::Algorithm;

use super::{RunEnd, SearchStrategy, voice};
use crate::sequencer::StepContext;
use crate::state::MAX_ENERGY;

/// Sequential scan. Works on sorted and unsorted datasets; duplicates
/// are matched at the lowest index because scan order is fixed.
pub struct LinearScan;

#[async_trait]
impl SearchStrategy for LinearScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Linear
    }

    async fn run(&self, ctx: &StepContext) -> RunEnd {
        let n = ctx.dataset().len();
        if n == 0 {
            ctx.commit(|state| {
                state.energy = 0;
                state.status = voice::linear_failed(ctx.scenario());
            });
            return RunEnd::Exhausted;
        }
        // Per-step cost such that energy reaches exactly zero when the
        // whole dataset is exhausted.
        let cost = MAX_ENERGY / n as u32;

        for i in 0..n {
            if !ctx.pause_gate().await {
                return RunEnd::Cancelled;
            }
            ctx.commit(|state| {
                state.steps += 1;
                state.active = Some(i);
                state.deplete(cost);
                state.status = voice::scanning(ctx.scenario(), i, ctx.target());
            });
            if !ctx.suspend().await {
                return RunEnd::Cancelled;
            }
            if ctx.dataset().items()[i].compare == *ctx.target() {
                ctx.commit(|state| {
                    state.found = Some(i);
                    state.status = voice::found(ctx.scenario(), i);
                });
                return RunEnd::Found { index: i };
            }
        }

        ctx.commit(|state| {
            state.active = None;
            state.energy = 0;
            state.status = voice::linear_failed(ctx.scenario());
        });
        RunEnd::Exhausted
    }
}
