// src/core/handler/actions/remove_chars.rs

use crate::core::handler::Handler;
use crate::core::{PipelineError, Request};
use tracing::trace;

/// Deletes every occurrence of each configured character from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveChars {
    chars: Vec<char>,
}

impl RemoveChars {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    /// Builds the handler from every character of `chars`.
    pub fn from_str_chars(chars: &str) -> Self {
        Self::new(chars.chars())
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Handler for RemoveChars {
    fn handle(&self, request: &mut Request) -> Result<(), PipelineError> {
        let removed = request.remove_chars(&self.chars);
        trace!(chars = ?self.chars, removed, "removed characters");
        Ok(())
    }
}
