// src/core/errors.rs

//! Defines the primary error type for the pipeline and its handlers.

use thiserror::Error;

/// The main error enum, representing all possible failures while building or
/// running a pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Handler '{0}' is already registered")]
    DuplicateHandler(String),

    #[error("Unknown handler '{0}'")]
    UnknownHandler(String),

    #[error("Unknown handler id {0}")]
    UnknownHandlerId(usize),

    /// A handler definition that cannot be turned into a working handler.
    #[error("Invalid handler '{name}': {reason}")]
    InvalidHandler { name: String, reason: String },

    /// A handler reported a failure. The run stops at this handler.
    #[error("Handler '{name}' failed: {message}")]
    Handler { name: String, message: String },
}

impl PipelineError {
    /// Convenience constructor for handler failures.
    pub fn handler(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            name: name.into(),
            message: message.into(),
        }
    }
}
