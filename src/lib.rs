//! Todo Lists - session-scoped to-do list manager
//!
//! This crate serves named to-do lists over HTTP. Every browser session owns
//! its own lists; nothing is shared between sessions or persisted past the
//! session's lifetime.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
