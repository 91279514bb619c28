//! One-shot flash messages.
//!
//! A handler sets a message, the next rendered view drains it. Draining
//! happens before the view is built so the map is empty on every exit path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Delete,
}

/// Pending flash messages, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    messages: BTreeMap<FlashKind, String>,
}

impl Flash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for a kind, replacing any earlier one.
    pub fn set(&mut self, kind: FlashKind, message: impl Into<String>) {
        self.messages.insert(kind, message.into());
    }

    pub fn get(&self, kind: FlashKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes and returns every pending message.
    pub fn drain(&mut self) -> Flash {
        std::mem::take(self)
    }

    /// Consumes the flash, yielding the message of one kind.
    pub fn into_message(mut self, kind: FlashKind) -> Option<String> {
        self.messages.remove(&kind)
    }
}
