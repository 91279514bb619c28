//! Application layer - command handlers.
//!
//! This layer orchestrates domain operations on an explicit session context.

pub mod handlers;
