// src/core/chain/mod.rs

//! A linked chain of responsibility.
//!
//! Unlike the [`Pipeline`](crate::core::handler::pipeline::Pipeline), where
//! every handler runs, a chain offers the request to each link in turn and
//! stops at the first link that answers.

pub mod responder;

pub use responder::{Eater, Responder};

use tracing::{debug, trace};

/// An ordered sequence of responders.
#[derive(Default)]
pub struct Chain {
    links: Vec<Box<dyn Responder>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link to the end of the chain.
    pub fn then<R: Responder + 'static>(mut self, responder: R) -> Self {
        self.links.push(Box::new(responder));
        self
    }

    /// Appends a link in place.
    pub fn push(&mut self, responder: Box<dyn Responder>) {
        self.links.push(responder);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Offers `request` to the whole chain, starting from the head.
    pub fn handle(&self, request: &str) -> Option<String> {
        self.handle_from(0, request)
    }

    /// Offers `request` to the sub-chain starting at link `start`.
    /// A start past the end of the chain yields `None`.
    pub fn handle_from(&self, start: usize, request: &str) -> Option<String> {
        for link in self.links.iter().skip(start) {
            if let Some(answer) = link.respond(request) {
                debug!(link = link.label(), request, "request answered");
                return Some(answer);
            }
            trace!(link = link.label(), request, "passed on");
        }
        debug!(request, "request left untouched");
        None
    }

    /// Labels of the links, head first.
    pub fn labels(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.label()).collect()
    }
}
