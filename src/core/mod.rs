// src/core/mod.rs

//! The central module containing the handler pipeline and the responder chain.

pub mod chain;
pub mod errors;
pub mod handler;
pub mod request;

pub use errors::PipelineError;
pub use handler::pipeline::{Pipeline, RunReport};
pub use handler::{Handler, HandlerId, HandlerRegistry, Priority};
pub use request::Request;
