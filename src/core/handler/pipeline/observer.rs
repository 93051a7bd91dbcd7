// src/core/handler/pipeline/observer.rs

//! Subscribers notified as a pipeline run progresses.

use super::report::{RunReport, Step};
use parking_lot::Mutex;

/// Receives every step of every run of the pipeline it is attached to.
pub trait RunObserver: Send + Sync {
    /// Called after each scheduled entry, whether it was applied or skipped.
    fn on_step(&self, step: &Step);

    /// Called once the run completes successfully.
    fn on_finish(&self, _report: &RunReport) {}
}

/// Identifies an attached observer so it can be detached later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// An observer that keeps every step it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    steps: Mutex<Vec<Step>>,
    finished_runs: Mutex<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all steps recorded so far, across runs.
    pub fn steps(&self) -> Vec<Step> {
        self.steps.lock().clone()
    }

    /// The number of runs that reached `on_finish`.
    pub fn finished_runs(&self) -> usize {
        *self.finished_runs.lock()
    }

    pub fn clear(&self) {
        self.steps.lock().clear();
        *self.finished_runs.lock() = 0;
    }
}

impl RunObserver for RecordingObserver {
    fn on_step(&self, step: &Step) {
        self.steps.lock().push(step.clone());
    }

    fn on_finish(&self, _report: &RunReport) {
        *self.finished_runs.lock() += 1;
    }
}
