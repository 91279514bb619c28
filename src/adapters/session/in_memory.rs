//! In-memory session store.
//!
//! Sessions live in a process-local map and vanish on restart. Expiry is
//! by idle time: a session untouched for longer than the configured timeout
//! is treated as absent and removed on the next sweep.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::TodoSession;
use crate::ports::{SessionHandle, SessionStore, SessionStoreError};

/// Default idle timeout: one day.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 86_400;

#[derive(Debug)]
struct Entry {
    state: SessionHandle,
    last_seen: Timestamp,
}

/// In-memory session store for single-process deployments.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
    idle_timeout_secs: u64,
}

impl InMemorySessionStore {
    /// Create a store that expires sessions after `idle_timeout_secs`.
    pub fn new(idle_timeout_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout_secs,
        }
    }

    /// Create a store with the default one-day idle timeout.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT_SECS)
    }

    /// Returns the configured idle timeout.
    pub fn idle_timeout_secs(&self) -> u64 {
        self.idle_timeout_secs
    }

    fn is_expired(&self, entry: &Entry, now: &Timestamp) -> bool {
        entry.last_seen.is_idle_longer_than(self.idle_timeout_secs, now)
    }

    async fn get_at(&self, id: &SessionId, now: Timestamp) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        if self.is_expired(entry, &now) {
            sessions.remove(id);
            tracing::debug!(session_id = %id, "expired session dropped on access");
            return None;
        }
        entry.last_seen = now;
        Some(Arc::clone(&entry.state))
    }

    async fn purge_expired_at(&self, now: Timestamp) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, &now));
        before - sessions.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<(SessionId, SessionHandle), SessionStoreError> {
        let id = SessionId::new();
        let state: SessionHandle = Arc::new(Mutex::new(TodoSession::new()));

        self.sessions.write().await.insert(
            id,
            Entry {
                state: Arc::clone(&state),
                last_seen: Timestamp::now(),
            },
        );

        tracing::debug!(session_id = %id, "session created");
        Ok((id, state))
    }

    async fn get(&self, id: &SessionId) -> Result<Option<SessionHandle>, SessionStoreError> {
        Ok(self.get_at(id, Timestamp::now()).await)
    }

    async fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        Ok(self.purge_expired_at(Timestamp::now()).await)
    }

    async fn len(&self) -> Result<usize, SessionStoreError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::FlashKind;

    #[tokio::test]
    async fn created_session_is_retrievable() {
        let store = InMemorySessionStore::with_defaults();
        let (id, handle) = store.create().await.unwrap();

        handle.lock().await.set_flash(FlashKind::Success, "hi");

        let found = store.get(&id).await.unwrap().expect("session should exist");
        assert_eq!(found.lock().await.flash().get(FlashKind::Success), Some("hi"));
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let store = InMemorySessionStore::with_defaults();
        assert!(store.get(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemorySessionStore::with_defaults();
        let (a, handle_a) = store.create().await.unwrap();
        let (b, _) = store.create().await.unwrap();
        assert_ne!(a, b);

        handle_a.lock().await.set_flash(FlashKind::Error, "only a");

        let handle_b = store.get(&b).await.unwrap().unwrap();
        assert!(handle_b.lock().await.flash().is_empty());
    }

    #[tokio::test]
    async fn expired_session_is_dropped_on_access() {
        let store = InMemorySessionStore::new(60);
        let (id, _) = store.create().await.unwrap();

        let later = Timestamp::now().plus_secs(120);
        assert!(store.get_at(&id, later).await.is_none());
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn access_refreshes_idle_timer() {
        let store = InMemorySessionStore::new(60);
        let (id, _) = store.create().await.unwrap();

        let t1 = Timestamp::now().plus_secs(50);
        assert!(store.get_at(&id, t1).await.is_some());

        let t2 = t1.plus_secs(50);
        assert!(store.get_at(&id, t2).await.is_some());
    }

    #[tokio::test]
    async fn purge_removes_only_expired_sessions() {
        let store = InMemorySessionStore::new(60);
        let (stale, _) = store.create().await.unwrap();
        let (fresh, _) = store.create().await.unwrap();

        let later = Timestamp::now().plus_secs(50);
        store.get_at(&fresh, later).await.unwrap();

        let purged = store.purge_expired_at(later.plus_secs(30)).await;

        assert_eq!(purged, 1);
        assert!(store.get(&fresh).await.unwrap().is_some());
        assert!(store.get(&stale).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn huge_idle_timeout_keeps_sessions_alive() {
        for idle in [u64::MAX, 10_000_000_000_000_000] {
            let store = InMemorySessionStore::new(idle);
            let (id, _) = store.create().await.unwrap();

            assert!(store.get(&id).await.unwrap().is_some(), "idle = {}", idle);
            assert_eq!(store.purge_expired().await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn remove_forgets_session() {
        let store = InMemorySessionStore::with_defaults();
        let (id, _) = store.create().await.unwrap();
        store.remove(&id).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }
}
