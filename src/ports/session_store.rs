//! Session store port.
//!
//! Defines how per-browser session contexts are created, looked up and
//! expired. The HTTP layer resolves a session once per request through this
//! port and hands the locked context to the handler.
//!
//! # Concurrency
//!
//! Each session lives behind its own mutex. Two requests for the same
//! session (e.g. two tabs) run their read-modify-write one after the other;
//! requests for different sessions never wait on each other.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionId;
use crate::domain::session::TodoSession;

/// Shared, lockable handle to one session's state.
pub type SessionHandle = Arc<Mutex<TodoSession>>;

/// Errors that can occur in session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for per-browser session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a fresh, empty session.
    async fn create(&self) -> Result<(SessionId, SessionHandle), SessionStoreError>;

    /// Look up a live session and refresh its last-access time.
    ///
    /// Returns `None` for unknown or expired ids.
    async fn get(&self, id: &SessionId) -> Result<Option<SessionHandle>, SessionStoreError>;

    /// Drop a session. Unknown ids are ignored.
    async fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError>;

    /// Remove every expired session, returning how many were dropped.
    async fn purge_expired(&self) -> Result<usize, SessionStoreError>;

    /// Number of sessions currently held, expired ones included.
    async fn len(&self) -> Result<usize, SessionStoreError>;
}
