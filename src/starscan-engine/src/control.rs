//! Run/pause/cancel flags with cooperative suspension.
//!
//! A single `RunControl` is owned by the sequencer and checked by the
//! run loop at every suspension point. The run slot is a single atomic
//! word: even means idle, odd means a run is active, and the value is
//! the epoch of that run. Each successful `try_begin` mints a new
//! epoch; a task holding a stale epoch must terminate silently, so a
//! run cancelled mid-sleep can never observe a successor's flags as
//! its own. Pausing is observed by polling at a fixed short interval
//! rather than event-driven wake, which bounds resume latency without
//! cross-task signaling. Cancellation is cooperative: the loop sees it
//! at its next suspension point, never mid-step.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

/// How often the run loop re-checks the pause flag while suspended.
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared run-control flags. Idle is both the initial and terminal
/// state; `paused` is meaningful only while running.
#[derive(Debug, Default)]
pub struct RunControl {
    /// Even = idle, odd = running; the value is the current run epoch.
    state: AtomicU64,
    paused: AtomicBool,
}

impl RunControl {
    /// Claims the single run slot, minting the new run's epoch.
    /// Returns `None` if a run is already active, in which case the
    /// caller must treat `start` as a no-op.
    pub fn try_begin(&self) -> Option<u64> {
        let mut state = self.state.load(Ordering::SeqCst);
        loop {
            if state & 1 == 1 {
                return None;
            }
            match self
                .state
                .compare_exchange(state, state + 1, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => {
                    self.paused.store(false, Ordering::SeqCst);
                    return Some(state + 1);
                }
                Err(actual) => state = actual,
            }
        }
    }

    /// True while a run is active (and not yet cancelled/finished).
    pub fn is_running(&self) -> bool {
        self.state.load(Ordering::SeqCst) & 1 == 1
    }

    /// True while the active run is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Suspends the run. No-op if nothing is running.
    pub fn pause(&self) {
        if self.is_running() {
            self.paused.store(true, Ordering::SeqCst);
        }
    }

    /// Clears the pause flag.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Flips the pause flag. No-op if nothing is running.
    pub fn toggle_pause(&self) {
        if self.is_running() {
            self.paused.fetch_xor(true, Ordering::SeqCst);
        }
    }

    /// Ends the active run, whatever its epoch. The in-flight loop
    /// observes this at its next suspension point and terminates
    /// without emitting an outcome.
    pub fn cancel(&self) {
        let mut state = self.state.load(Ordering::SeqCst);
        while state & 1 == 1 {
            match self
                .state
                .compare_exchange(state, state + 1, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => break,
                Err(actual) => state = actual,
            }
        }
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Ends the run that minted `epoch`. A stale epoch is a no-op, so
    /// a dead task finishing late cannot end its successor's run.
    pub fn finish(&self, epoch: u64) {
        if self
            .state
            .compare_exchange(epoch, epoch + 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.paused.store(false, Ordering::SeqCst);
        }
    }

    /// Waits out any pause, polling at [`PAUSE_POLL_INTERVAL`].
    /// Returns whether the run that minted `epoch` is still the active
    /// one; `false` means the loop must terminate silently.
    pub async fn gate(&self, epoch: u64) -> bool {
        while self.is_paused() && self.state.load(Ordering::SeqCst) == epoch {
            sleep(PAUSE_POLL_INTERVAL).await;
        }
        self.state.load(Ordering::SeqCst) == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_run_may_begin() {
        let control = RunControl::default();
        assert!(control.try_begin().is_some());
        assert!(control.try_begin().is_none());
        control.cancel();
        assert!(control.try_begin().is_some());
    }

    #[test]
    fn each_run_mints_a_fresh_epoch() {
        let control = RunControl::default();
        let first = control.try_begin().unwrap();
        control.cancel();
        let second = control.try_begin().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn finish_ignores_stale_epochs() {
        let control = RunControl::default();
        let first = control.try_begin().unwrap();
        control.cancel();
        let second = control.try_begin().unwrap();

        // The dead first run finishing late must not end the second.
        control.finish(first);
        assert!(control.is_running());

        control.finish(second);
        assert!(!control.is_running());
    }

    #[test]
    fn pause_is_noop_when_idle() {
        let control = RunControl::default();
        control.pause();
        assert!(!control.is_paused());
        control.toggle_pause();
        assert!(!control.is_paused());
    }

    #[test]
    fn begin_clears_stale_pause() {
        let control = RunControl::default();
        assert!(control.try_begin().is_some());
        control.pause();
        control.cancel();
        assert!(control.try_begin().is_some());
        assert!(!control.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn gate_waits_for_resume() {
        use std::sync::Arc;

        let control = Arc::new(RunControl::default());
        let epoch = control.try_begin().unwrap();
        control.pause();

        let waiter = {
            let control = control.clone();
            tokio::spawn(async move { control.gate(epoch).await })
        };

        // Let the gate poll a few times while paused.
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!waiter.is_finished());

        control.resume();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn gate_reports_cancellation_while_paused() {
        use std::sync::Arc;

        let control = Arc::new(RunControl::default());
        let epoch = control.try_begin().unwrap();
        control.pause();

        let waiter = {
            let control = control.clone();
            tokio::spawn(async move { control.gate(epoch).await })
        };

        tokio::time::sleep(Duration::from_millis(150)).await;
        control.cancel();
        assert!(!waiter.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn gate_is_stale_once_a_successor_begins() {
        let control = RunControl::default();
        let first = control.try_begin().unwrap();
        control.cancel();
        let second = control.try_begin().unwrap();

        assert!(!control.gate(first).await);
        assert!(control.gate(second).await);
    }
}
