// src/core/handler/actions/mod.rs

// Built-in handlers that can be referenced from the configuration file.
pub mod passthrough;
pub mod remove_chars;
pub mod replace;

pub use passthrough::PassThrough;
pub use remove_chars::RemoveChars;
pub use replace::Replace;
