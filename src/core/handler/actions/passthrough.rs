// src/core/handler/actions/passthrough.rs

use crate::core::handler::Handler;
use crate::core::{PipelineError, Request};

/// A handler with no transformation to apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Handler for PassThrough {
    fn handle(&self, _request: &mut Request) -> Result<(), PipelineError> {
        Ok(())
    }
}
