//! Auth session provider
//!
//! Exactly three states: `Loading` before the persisted session has been
//! checked, then `Anonymous` or `Authenticated`. The only transitions after
//! resolution are login and logout.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::http::AdminClient;

/// Credential bundle persisted across process restarts (the session-storage
/// analog of the web dashboard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user_id: String,
}

/// Persistence seam for the session credential. Injected into the client so
/// tests can swap in an in-memory store.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> ApiResult<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// JSON file under a fixed path.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ApiResult<Option<StoredSession>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ApiError::Session(e.to_string())),
        };
        // A corrupt session file is treated as no session rather than a
        // hard failure; the operator just logs in again.
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &StoredSession) -> ApiResult<()> {
        let raw = serde_json::to_string(session).map_err(|e| ApiError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ApiError::Session(e.to_string()))
    }

    fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Session(e.to_string())),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ApiResult<Option<StoredSession>> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &StoredSession) -> ApiResult<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted state not yet checked
    Loading,
    /// No credential held
    Anonymous,
    /// Credential held and attached to outgoing requests
    Authenticated,
}

/// Auth session provider: resolves persisted state once, then owns the
/// login/logout transitions.
pub struct Session {
    client: AdminClient,
    state: SessionState,
    user_id: Option<String>,
}

impl Session {
    pub fn new(client: AdminClient) -> Self {
        Self {
            client,
            state: SessionState::Loading,
            user_id: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    /// Check the persisted store and settle into `Authenticated` or
    /// `Anonymous`. Idempotent after the first call.
    pub fn resolve(&mut self) -> ApiResult<SessionState> {
        if self.state != SessionState::Loading {
            return Ok(self.state);
        }
        match self.client.session_store().load()? {
            Some(saved) => {
                self.client.token_store().set(Some(saved.token));
                self.user_id = Some(saved.user_id);
                self.state = SessionState::Authenticated;
            }
            None => {
                self.state = SessionState::Anonymous;
            }
        }
        Ok(self.state)
    }

    /// Authenticate against the backend. On success the credential is held
    /// in memory and persisted; on failure the backend's error message
    /// propagates unchanged and nothing is stored.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<()> {
        let res = self.client.login(email, password).await?;
        self.client.token_store().set(Some(res.token.clone()));
        self.client.session_store().save(&StoredSession {
            token: res.token,
            user_id: res.user_id.clone(),
        })?;
        self.user_id = Some(res.user_id);
        self.state = SessionState::Authenticated;
        tracing::info!("Admin session established");
        Ok(())
    }

    /// Drop the credential from memory and from the persisted store.
    pub fn logout(&mut self) -> ApiResult<()> {
        self.client.token_store().clear();
        self.client.session_store().clear()?;
        self.user_id = None;
        self.state = SessionState::Anonymous;
        tracing::info!("Admin session cleared");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        let session = StoredSession {
            token: "tok".to_string(),
            user_id: "admin-1".to_string(),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_missing_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
        // Clearing a store that never existed is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        let session = StoredSession {
            token: "tok".to_string(),
            user_id: "admin-1".to_string(),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_corrupt_file_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileSessionStore::new(path);
        assert!(store.load().unwrap().is_none());
    }
}
