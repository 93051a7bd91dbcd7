// src/config.rs

//! Manages pipeline configuration: loading the handler table, validation, and
//! building a runnable [`Pipeline`].

use crate::core::handler::actions::{PassThrough, RemoveChars, Replace};
use crate::core::{Handler, HandlerRegistry, Pipeline, PipelineError, Priority};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use tracing::{debug, warn};

/// The built-in handler kinds, selected by the `kind` key of a `[[handlers]]` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandlerKind {
    /// Deletes every character listed in `chars`.
    RemoveChars { chars: String },
    /// Replaces every occurrence of `from` with `to`.
    Replace {
        from: String,
        #[serde(default)]
        to: String,
    },
    /// Leaves the request unchanged.
    PassThrough,
}

/// One row of the handler table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(flatten)]
    pub kind: HandlerKind,
}

impl HandlerConfig {
    /// Instantiates the handler described by this row.
    pub fn build(&self) -> Result<Box<dyn Handler>, PipelineError> {
        let handler: Box<dyn Handler> = match &self.kind {
            HandlerKind::RemoveChars { chars } => {
                if chars.is_empty() {
                    return Err(PipelineError::InvalidHandler {
                        name: self.name.clone(),
                        reason: "'chars' cannot be empty".to_string(),
                    });
                }
                Box::new(RemoveChars::from_str_chars(chars))
            }
            HandlerKind::Replace { from, to } => Box::new(Replace::new(&self.name, from, to)?),
            HandlerKind::PassThrough => Box::new(PassThrough),
        };
        Ok(handler)
    }
}

/// The top-level configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// The request text used when none is given on the command line.
    #[serde(default = "default_request")]
    pub request: String,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_request() -> String {
    "abcdefg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request: default_request(),
            handlers: vec![],
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid configuration in '{path}'"))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration to ensure the handler table can be built.
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }

        let mut seen = HashSet::new();
        for (i, handler) in self.handlers.iter().enumerate() {
            if handler.name.trim().is_empty() {
                return Err(anyhow!("handler #{}: name cannot be empty", i + 1));
            }
            if !seen.insert(handler.name.as_str()) {
                return Err(anyhow!(
                    "handler #{}: name '{}' is declared more than once",
                    i + 1,
                    handler.name
                ));
            }
            match &handler.kind {
                HandlerKind::RemoveChars { chars } if chars.is_empty() => {
                    return Err(anyhow!(
                        "handler '{}': remove_chars requires a non-empty 'chars'",
                        handler.name
                    ));
                }
                HandlerKind::Replace { from, .. } if from.is_empty() => {
                    return Err(anyhow!(
                        "handler '{}': replace requires a non-empty 'from'",
                        handler.name
                    ));
                }
                _ => {}
            }
        }

        if self.handlers.is_empty() {
            warn!("no handlers configured; requests will pass through unchanged");
        }
        Ok(())
    }

    /// Builds the registry in declaration order and wraps it in a pipeline.
    pub fn build_pipeline(&self) -> Result<Pipeline, PipelineError> {
        let mut registry = HandlerRegistry::new();
        for handler in &self.handlers {
            registry.register_boxed(&handler.name, handler.priority, handler.build()?)?;
        }
        debug!(handlers = registry.len(), "built pipeline from configuration");
        Ok(Pipeline::new(registry))
    }
}
