//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Per-browser session state lookup and expiry

mod session_store;

pub use session_store::{SessionHandle, SessionStore, SessionStoreError};
