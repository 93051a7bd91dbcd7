// src/core/chain/responder.rs

//! The responder trait and the built-in responders.

/// A link of a [`Chain`](super::Chain) that may answer a request.
pub trait Responder: Send + Sync {
    /// Returns an answer if this link handles `request`, `None` to pass it on.
    fn respond(&self, request: &str) -> Option<String>;

    /// A label used in logs.
    fn label(&self) -> &str;
}

/// Answers requests that match the food it eats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eater {
    speaker: String,
    food: String,
}

impl Eater {
    pub fn new(speaker: impl Into<String>, food: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            food: food.into(),
        }
    }
}

impl Responder for Eater {
    fn respond(&self, request: &str) -> Option<String> {
        (request == self.food).then(|| format!("{}: I'll eat the {}", self.speaker, request))
    }

    fn label(&self) -> &str {
        &self.speaker
    }
}
