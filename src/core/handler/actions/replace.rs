// src/core/handler/actions/replace.rs

use crate::core::handler::Handler;
use crate::core::{PipelineError, Request};
use tracing::trace;

/// Replaces every occurrence of a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replace {
    from: String,
    to: String,
}

impl Replace {
    /// Creates the handler. An empty `from` is rejected, since it would match
    /// between every character.
    pub fn new(
        name: &str,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let from = from.into();
        if from.is_empty() {
            return Err(PipelineError::InvalidHandler {
                name: name.to_string(),
                reason: "'from' cannot be empty".to_string(),
            });
        }
        Ok(Self { from, to: to.into() })
    }
}

impl Handler for Replace {
    fn handle(&self, request: &mut Request) -> Result<(), PipelineError> {
        let replaced = request.replace_all(&self.from, &self.to);
        trace!(from = %self.from, to = %self.to, replaced, "replaced substrings");
        Ok(())
    }
}
