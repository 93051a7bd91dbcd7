// src/core/handler/pipeline/mod.rs

//! The priority-ordered pipeline: the runner, its per-run report, and run observers.

pub mod observer;
pub mod report;
pub mod runner;

pub use observer::{ObserverId, RecordingObserver, RunObserver};
pub use report::{RunReport, Step, StepOutcome};
pub use runner::Pipeline;
