//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps)
//! - `todo` - Lists, todos, validation, id assignment and display ordering
//! - `session` - Per-browser session context and flash messages

pub mod foundation;
pub mod session;
pub mod todo;
