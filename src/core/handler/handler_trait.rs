// src/core/handler/handler_trait.rs

//! Defines the core trait implemented by every pipeline handler.

use crate::core::{PipelineError, Request};

/// A unit of transformation over the shared request.
///
/// `handle` has no default body: every handler must say what it does, even if
/// the answer is "nothing" (see [`PassThrough`](super::actions::PassThrough)).
/// The runner marks the handler as handled once `handle` returns, so it is
/// never invoked twice within the same run.
pub trait Handler: Send + Sync {
    /// Inspects and optionally mutates the request in place.
    fn handle(&self, request: &mut Request) -> Result<(), PipelineError>;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, request: &mut Request) -> Result<(), PipelineError> {
        (**self).handle(request)
    }
}

/// Adapts a closure into a [`Handler`].
pub struct FnHandler<F>
where
    F: Fn(&mut Request) -> Result<(), PipelineError> + Send + Sync,
{
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&mut Request) -> Result<(), PipelineError> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&mut Request) -> Result<(), PipelineError> + Send + Sync,
{
    fn handle(&self, request: &mut Request) -> Result<(), PipelineError> {
        (self.func)(request)
    }
}
