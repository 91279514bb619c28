//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum router, session middleware and handlers
//! - `session` - Session store implementations (in-memory)

pub mod http;
pub mod session;

pub use session::InMemorySessionStore;
