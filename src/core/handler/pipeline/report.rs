// src/core/handler/pipeline/report.rs

//! The record of a single pipeline run: which handler did what, and when.

use crate::core::handler::{HandlerId, Priority};
use std::time::Duration;

/// What happened to a scheduled handler during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The handler was invoked and is now marked handled.
    Applied,
    /// The handler was already handled in this run and was not invoked again.
    Skipped,
}

/// One scheduled entry of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: HandlerId,
    pub handler: String,
    pub priority: Priority,
    pub outcome: StepOutcome,
    /// The request text as the handler received it.
    pub before: String,
    /// The request text after the handler returned.
    pub after: String,
    pub elapsed: Duration,
}

impl Step {
    /// Whether this step changed the request.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// The full record of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub steps: Vec<Step>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn applied(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Applied)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Skipped)
    }

    /// Names of the handlers that ran, in the order they ran.
    pub fn applied_names(&self) -> Vec<&str> {
        self.applied().map(|s| s.handler.as_str()).collect()
    }

    /// Names of the handlers that actually modified the request.
    pub fn changed_by(&self) -> Vec<&str> {
        self.applied()
            .filter(|s| s.changed())
            .map(|s| s.handler.as_str())
            .collect()
    }

    /// Final request text, if at least one step was recorded.
    pub fn final_text(&self) -> Option<&str> {
        self.steps.last().map(|s| s.after.as_str())
    }
}
