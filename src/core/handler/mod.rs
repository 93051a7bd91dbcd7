// src/core/handler/mod.rs

pub mod actions;
pub mod handler_trait;
pub mod pipeline;
pub mod registry;

pub use handler_trait::{FnHandler, Handler};
pub use registry::{HandlerEntry, HandlerId, HandlerRegistry, Priority};
