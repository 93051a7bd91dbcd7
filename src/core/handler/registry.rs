// src/core/handler/registry.rs

//! The handler registry: the table mapping each handler's identity to its
//! priority.
//!
//! Handlers are registered once at startup. Each receives a [`HandlerId`] in
//! declaration order, which is also the tie-breaker between equal priorities.

use super::Handler;
use crate::core::PipelineError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fmt;
use tracing::debug;

/// Integer ordering key. Lower values run first; negative values are allowed.
pub type Priority = i64;

/// An opaque handle to a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(usize);

impl HandlerId {
    /// The declaration index of the handler.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered handler together with its configured priority.
pub struct HandlerEntry {
    pub priority: Priority,
    handler: Box<dyn Handler>,
}

impl HandlerEntry {
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }
}

/// Holds the set of available handlers, keyed by unique name.
#[derive(Default)]
pub struct HandlerRegistry {
    entries: IndexMap<String, HandlerEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under `name` with the given priority.
    pub fn register<H>(
        &mut self,
        name: &str,
        priority: Priority,
        handler: H,
    ) -> Result<HandlerId, PipelineError>
    where
        H: Handler + 'static,
    {
        self.register_boxed(name, priority, Box::new(handler))
    }

    /// Registers an already boxed handler, as produced by the configuration loader.
    pub fn register_boxed(
        &mut self,
        name: &str,
        priority: Priority,
        handler: Box<dyn Handler>,
    ) -> Result<HandlerId, PipelineError> {
        let index = self.entries.len();
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(_) => Err(PipelineError::DuplicateHandler(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(HandlerEntry { priority, handler });
                debug!(handler = name, priority, id = index, "registered handler");
                Ok(HandlerId(index))
            }
        }
    }

    /// Reconfigures the priority of an already registered handler.
    pub fn set_priority(&mut self, name: &str, priority: Priority) -> Result<(), PipelineError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| PipelineError::UnknownHandler(name.to_string()))?;
        debug!(handler = name, from = entry.priority, to = priority, "priority changed");
        entry.priority = priority;
        Ok(())
    }

    pub fn id_of(&self, name: &str) -> Option<HandlerId> {
        self.entries.get_index_of(name).map(HandlerId)
    }

    pub fn name_of(&self, id: HandlerId) -> Option<&str> {
        self.entries.get_index(id.0).map(|(name, _)| name.as_str())
    }

    pub fn priority_of(&self, id: HandlerId) -> Option<Priority> {
        self.entries.get_index(id.0).map(|(_, e)| e.priority)
    }

    /// Returns the name and entry for `id`, or an error for ids this registry never issued.
    pub fn get(&self, id: HandlerId) -> Result<(&str, &HandlerEntry), PipelineError> {
        self.entries
            .get_index(id.0)
            .map(|(name, entry)| (name.as_str(), entry))
            .ok_or(PipelineError::UnknownHandlerId(id.0))
    }

    /// Returns all ids in declaration order.
    pub fn ids(&self) -> Vec<HandlerId> {
        (0..self.entries.len()).map(HandlerId).collect()
    }

    /// Iterates over `(id, name, priority)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (HandlerId, &str, Priority)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, e))| (HandlerId(i), name.as_str(), e.priority))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, e)| (name, e.priority)))
            .finish()
    }
}
