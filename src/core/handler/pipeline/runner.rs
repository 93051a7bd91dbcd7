// src/core/handler/pipeline/runner.rs

//! The pipeline runner.
//!
//! A run sorts the requested handlers by ascending priority (ties keep
//! declaration order) and applies each one to the shared request exactly once.
//! Handled flags live only for the duration of a run, so repeated runs over
//! equal requests produce equal results.

use super::observer::{ObserverId, RunObserver};
use super::report::{RunReport, Step, StepOutcome};
use crate::core::handler::{HandlerId, HandlerRegistry};
use crate::core::{PipelineError, Request};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

/// Runs the handlers of a [`HandlerRegistry`] over requests.
pub struct Pipeline {
    registry: HandlerRegistry,
    observers: Vec<(ObserverId, Arc<dyn RunObserver>)>,
    next_observer_id: u64,
}

impl Pipeline {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Mutable access for reconfiguring priorities between runs.
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Subscribes an observer to every subsequent run.
    pub fn attach(&mut self, observer: Arc<dyn RunObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        debug!(observer = id.0, "attached observer");
        id
    }

    /// Unsubscribes an observer. Returns `false` if it was not attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        let removed = self.observers.len() != before;
        if removed {
            debug!(observer = id.0, "detached observer");
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The order in which [`run`](Self::run) invokes the registered handlers.
    pub fn schedule(&self) -> Vec<HandlerId> {
        let mut ids = self.registry.ids();
        ids.sort_by_key(|id| (self.registry.priority_of(*id).unwrap_or_default(), *id));
        ids
    }

    /// Runs every registered handler once over `request`.
    pub fn run(&self, request: &mut Request) -> Result<RunReport, PipelineError> {
        let ids = self.schedule();
        self.execute(ids, request)
    }

    /// Runs the given handler set over `request`.
    ///
    /// An id listed more than once is invoked only for its first occurrence;
    /// the repeats show up in the report as skipped. Ids this pipeline's
    /// registry never issued are rejected before any handler runs.
    pub fn run_set(
        &self,
        handlers: &[HandlerId],
        request: &mut Request,
    ) -> Result<RunReport, PipelineError> {
        let mut keyed = Vec::with_capacity(handlers.len());
        for &id in handlers {
            let (_, entry) = self.registry.get(id)?;
            keyed.push((entry.priority, id));
        }
        // Declaration order breaks priority ties, not position in `handlers`.
        keyed.sort();
        self.execute(keyed.into_iter().map(|(_, id)| id).collect(), request)
    }

    fn execute(
        &self,
        order: Vec<HandlerId>,
        request: &mut Request,
    ) -> Result<RunReport, PipelineError> {
        let span = info_span!("pipeline_run", handlers = order.len());
        let _guard = span.enter();

        let started = Instant::now();
        let mut handled = vec![false; self.registry.len()];
        let mut report = RunReport::default();

        for id in order {
            let (name, entry) = self.registry.get(id)?;
            let before = request.as_str().to_string();
            let step_started = Instant::now();

            let outcome = if handled[id.index()] {
                StepOutcome::Skipped
            } else {
                if let Err(e) = entry.handler().handle(request) {
                    warn!(handler = name, priority = entry.priority, error = %e, "handler failed, aborting run");
                    return Err(e);
                }
                handled[id.index()] = true;
                StepOutcome::Applied
            };

            let step = Step {
                id,
                handler: name.to_string(),
                priority: entry.priority,
                outcome,
                before,
                after: request.as_str().to_string(),
                elapsed: step_started.elapsed(),
            };
            debug!(
                handler = %step.handler,
                priority = step.priority,
                outcome = ?step.outcome,
                before = %step.before,
                after = %step.after,
                "pipeline step"
            );
            for (_, observer) in &self.observers {
                observer.on_step(&step);
            }
            report.steps.push(step);
        }

        report.elapsed = started.elapsed();
        info!(
            applied = report.applied().count(),
            skipped = report.skipped().count(),
            elapsed_us = report.elapsed.as_micros() as u64,
            "pipeline run finished"
        );
        for (_, observer) in &self.observers {
            observer.on_finish(&report);
        }
        Ok(report)
    }
}

impl From<HandlerRegistry> for Pipeline {
    fn from(registry: HandlerRegistry) -> Self {
        Self::new(registry)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("registry", &self.registry)
            .field("observers", &self.observers.len())
            .finish()
    }
}
