//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and time values that form the vocabulary
//! of the to-do list domain.

mod ids;
mod timestamp;

pub use ids::{ListId, SessionId, TodoId};
pub use timestamp::Timestamp;
