//! Session domain module.
//!
//! Holds the per-browser context (`TodoSession`) that every command
//! operates on, and the one-shot flash messages rendered by views.

mod aggregate;
mod flash;

pub use aggregate::TodoSession;
pub use flash::{Flash, FlashKind};
