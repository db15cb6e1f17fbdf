//! The step sequencer: sole mutator of per-step state.
//!
//! One `Sequencer` drives at most one run at a time. `start` validates
//! the target, claims the run slot and spawns the selected strategy as
//! a tokio task; `pause`/`resume`/`cancel`/`reset` flip the shared
//! control flags, which the task observes at its suspension points.
//! Readers (the projector, the UI) take committed snapshots between
//! steps; tests can additionally tap every committed snapshot through
//! an observer channel.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use starscan_protocol::{Algorithm, OutcomeRecord, OutcomeReporter, Scenario, SpeedPreset, Value};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::control::RunControl;
use crate::dataset::Dataset;
use crate::error::EngineError;
use crate::state::StepState;
use crate::strategy::{RunEnd, strategy_for};

/// State shared between the sequencer handle and the run task.
#[derive(Debug)]
pub struct RunShared {
    /// Run/pause/cancel flags.
    pub control: RunControl,
    state: Mutex<StepState>,
    observer: Mutex<Option<mpsc::UnboundedSender<StepState>>>,
}

impl Default for RunShared {
    fn default() -> Self {
        Self {
            control: RunControl::default(),
            state: Mutex::new(StepState::default()),
            observer: Mutex::new(None),
        }
    }
}

impl RunShared {
    /// Applies one mutation and publishes the committed snapshot to the
    /// observer, if any. This is the only way run state changes.
    pub fn commit(&self, mutate: impl FnOnce(&mut StepState)) {
        let snapshot = {
            let mut guard = self
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            mutate(&mut guard);
            guard.clone()
        };
        let observer = self
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(tx) = observer.as_ref() {
            let _ = tx.send(snapshot);
        }
    }

    /// Clones the latest committed state.
    pub fn snapshot(&self) -> StepState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Everything a strategy needs to drive one run.
pub struct StepContext {
    shared: Arc<RunShared>,
    epoch: u64,
    dataset: Arc<Dataset>,
    target: Value,
    scenario: Scenario,
    step_delay: Duration,
    probe_delay: Duration,
}

impl StepContext {
    /// The dataset under scan.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The coerced target value.
    pub fn target(&self) -> &Value {
        &self.target
    }

    /// The scenario, for status-line flavor.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Commits one visible mutation.
    pub fn commit(&self, mutate: impl FnOnce(&mut StepState)) {
        self.shared.commit(mutate);
    }

    /// Waits out any pause before the step's visible mutation.
    /// Returns `false` when the run was cancelled or superseded.
    pub async fn pause_gate(&self) -> bool {
        self.shared.control.gate(self.epoch).await
    }

    /// Suspends for the per-step delay, then honors pause/cancel.
    pub async fn suspend(&self) -> bool {
        sleep(self.step_delay).await;
        self.shared.control.gate(self.epoch).await
    }

    /// Suspends for the (longer) midpoint-probe delay.
    pub async fn suspend_probe(&self) -> bool {
        sleep(self.probe_delay).await;
        self.shared.control.gate(self.epoch).await
    }
}

/// The pausable, cancelable driver for one search run at a time.
pub struct Sequencer {
    shared: Arc<RunShared>,
    reporter: Arc<dyn OutcomeReporter>,
    user: String,
    task: Option<JoinHandle<()>>,
}

impl Sequencer {
    /// Creates a sequencer reporting outcomes as `user`.
    pub fn new(reporter: Arc<dyn OutcomeReporter>, user: impl Into<String>) -> Self {
        Self {
            shared: Arc::new(RunShared::default()),
            reporter,
            user: user.into(),
            task: None,
        }
    }

    /// Starts a run. No-op while a run is already active.
    ///
    /// Fails with [`EngineError::InvalidTarget`] when `raw_target`
    /// cannot be coerced to the dataset's comparable type; the run does
    /// not start and prior state is untouched.
    pub fn start(
        &mut self,
        dataset: Arc<Dataset>,
        raw_target: &str,
        algorithm: Algorithm,
        scenario: Scenario,
        preset: SpeedPreset,
    ) -> Result<(), EngineError> {
        if self.shared.control.is_running() {
            return Ok(());
        }
        let target = dataset.coerce_target(raw_target)?;
        let Some(epoch) = self.shared.control.try_begin() else {
            return Ok(());
        };

        self.shared.commit(StepState::clear);

        let ctx = StepContext {
            shared: self.shared.clone(),
            epoch,
            dataset,
            target,
            scenario,
            step_delay: preset.step_delay(),
            probe_delay: preset.probe_delay(),
        };
        let strategy = strategy_for(algorithm);
        let reporter = self.reporter.clone();
        let user = self.user.clone();

        self.task = Some(tokio::spawn(async move {
            let end = strategy.run(&ctx).await;
            let record = match end {
                RunEnd::Found { .. } => Some(OutcomeRecord::new(
                    user,
                    algorithm,
                    ctx.target.clone(),
                    true,
                    ctx.shared.snapshot().energy,
                )),
                RunEnd::Exhausted => {
                    Some(OutcomeRecord::new(user, algorithm, ctx.target.clone(), false, 0))
                }
                // A cancelled run reports nothing.
                RunEnd::Cancelled => None,
            };
            ctx.shared.control.finish(ctx.epoch);
            if let Some(record) = record {
                tracing::debug!(
                    algorithm = algorithm.as_str(),
                    success = record.success,
                    "run finished"
                );
                reporter.report(record).await;
            }
        }));
        Ok(())
    }

    /// Suspends the active run. No-op when idle.
    pub fn pause(&self) {
        self.shared.control.pause();
    }

    /// Resumes a paused run.
    pub fn resume(&self) {
        self.shared.control.resume();
    }

    /// Flips pause. No-op when idle.
    pub fn toggle_pause(&self) {
        self.shared.control.toggle_pause();
    }

    /// Cancels the active run; the loop terminates at its next
    /// suspension point and emits no outcome record.
    pub fn cancel(&self) {
        self.shared.control.cancel();
    }

    /// Cancels any active run and clears state and energy back to
    /// initial values. Idempotent.
    pub fn reset(&self) {
        self.shared.control.cancel();
        self.shared.commit(StepState::clear);
    }

    /// Sets the status line while idle (dataset regeneration notices
    /// and the like). Ignored during a run - the run loop owns the
    /// status line then.
    pub fn set_status(&self, status: impl Into<String>) {
        if !self.shared.control.is_running() {
            let status = status.into();
            self.shared.commit(|state| state.status = status);
        }
    }

    /// Latest committed snapshot.
    pub fn snapshot(&self) -> StepState {
        self.shared.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.shared.control.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.shared.control.is_paused()
    }

    /// Taps every committed snapshot. At most one observer at a time;
    /// a new call replaces the previous tap.
    pub fn observe(&self) -> mpsc::UnboundedReceiver<StepState> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self
            .shared
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(tx);
        rx
    }

    /// Waits for the in-flight run task to finish, if any.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}
