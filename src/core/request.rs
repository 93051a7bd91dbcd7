// src/core/request.rs

//! The mutable text value threaded through a pipeline run.

use std::fmt;

/// A single mutable text request.
///
/// Handlers receive `&mut Request` and edit the text in place. A request is
/// built once per run and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Request {
    text: String,
}

impl Request {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Direct access to the underlying buffer for handlers that need more
    /// than the helpers below.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Deletes every occurrence of any character in `chars`.
    /// Returns the number of characters removed.
    pub fn remove_chars(&mut self, chars: &[char]) -> usize {
        let before = self.text.chars().count();
        self.text.retain(|c| !chars.contains(&c));
        before - self.text.chars().count()
    }

    /// Replaces every occurrence of `from` with `to`.
    /// Returns the number of replacements made. An empty `from` matches nothing.
    pub fn replace_all(&mut self, from: &str, to: &str) -> usize {
        if from.is_empty() {
            return 0;
        }
        let count = self.text.matches(from).count();
        if count > 0 {
            self.text = self.text.replace(from, to);
        }
        count
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Request {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Request {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl AsRef<str> for Request {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
