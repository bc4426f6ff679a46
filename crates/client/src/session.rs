//! Login state and its persistence.
//!
//! A [`Session`] moves `Anonymous -> Pending -> Authenticated | Failed`.
//! `Failed` holds only the message to show; no credentials survive a failed
//! login. The token is persisted through a [`SessionStore`] so a restarted
//! app can [`Session::restore`] it, and is re-validated against
//! `/auth/profile` before being trusted.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::api;
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::models::Profile;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    /// A login or restore is in flight.
    Pending,
    Authenticated { token: String, profile: Profile },
    /// The last login attempt failed. Equivalent to anonymous.
    Failed { message: String },
}

/// What is written to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub profile: Profile,
}

/// Persistence for the bearer token and cached profile.
pub trait SessionStore {
    fn load(&self) -> ClientResult<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// Keeps the session as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    /// A missing file is no session. A corrupt file is also treated as no
    /// session so the user can log in again.
    fn load(&self) -> ClientResult<Option<StoredSession>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &StoredSession) -> ClientResult<()> {
        let json = serde_json::to_vec_pretty(session)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<StoredSession>> {
        // A poisoned lock still holds a usable value.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<StoredSession>> {
        Ok(self.slot().clone())
    }

    fn save(&self, session: &StoredSession) -> ClientResult<()> {
        *self.slot() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// The app's login session.
pub struct Session<S: SessionStore> {
    client: ApiClient,
    store: S,
    state: SessionState,
}

impl<S: SessionStore> Session<S> {
    /// A new anonymous session. `client` is used without its token.
    pub fn new(client: ApiClient, store: S) -> Self {
        Self {
            client: client.anonymous(),
            store,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            SessionState::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// A client carrying the session's token, if authenticated.
    pub fn api(&self) -> Option<ApiClient> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(self.client.with_token(token)),
            _ => None,
        }
    }

    /// Log in and persist the token. Failures clear the store and leave the
    /// session in [`SessionState::Failed`] with a message for the login page.
    pub async fn login(&mut self, email: &str, password: &str) -> &SessionState {
        self.state = SessionState::Pending;

        self.state = match api::auth::login(&self.client, email.trim(), password).await {
            Ok(response) => {
                let stored = StoredSession {
                    token: response.access_token,
                    profile: response.user,
                };
                self.persist(&stored);
                tracing::info!(user_id = %stored.profile.id, module = %stored.profile.module, "Logged in");
                SessionState::Authenticated {
                    token: stored.token,
                    profile: stored.profile,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                // A token from an earlier login must not survive a failed one.
                if let Err(e) = self.store.clear() {
                    tracing::warn!(error = %e, "Could not clear the stored session");
                }
                SessionState::Failed {
                    message: e.user_message(),
                }
            }
        };
        &self.state
    }

    /// Forget the token in memory and in the store.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Could not clear the stored session");
        }
        self.state = SessionState::Anonymous;
    }

    /// Re-validate a persisted token at app start.
    ///
    /// On success the profile is refreshed and persisted again. Any failure,
    /// including an unreachable server, clears the store and leaves the
    /// session anonymous.
    pub async fn restore(&mut self) -> &SessionState {
        let stored = match self.store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                self.state = SessionState::Anonymous;
                return &self.state;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read the stored session");
                self.logout();
                return &self.state;
            }
        };

        self.state = SessionState::Pending;
        let authed = self.client.with_token(&stored.token);
        match api::auth::profile(&authed).await {
            Ok(profile) => {
                let refreshed = StoredSession {
                    token: stored.token,
                    profile,
                };
                self.persist(&refreshed);
                self.state = SessionState::Authenticated {
                    token: refreshed.token,
                    profile: refreshed.profile,
                };
            }
            Err(e) => {
                tracing::info!(error = %e, "Stored session rejected, signing out");
                self.logout();
            }
        }
        &self.state
    }

    /// Sign out when a call failed because the token was rejected.
    ///
    /// Returns `true` if the session was ended.
    pub fn end_if_rejected(&mut self, err: &ClientError) -> bool {
        if matches!(err, ClientError::Unauthorized(_)) && self.is_authenticated() {
            tracing::info!("Token rejected by the server, signing out");
            self.logout();
            return true;
        }
        false
    }

    fn persist(&self, stored: &StoredSession) {
        if let Err(e) = self.store.save(stored) {
            tracing::warn!(error = %e, "Could not persist the session");
        }
    }
}

#[cfg(test)]
mod tests {
    use logistica_core::modules::Module;
    use uuid::Uuid;

    use super::*;

    fn stored() -> StoredSession {
        StoredSession {
            token: "token-1".into(),
            profile: Profile {
                id: Uuid::new_v4(),
                email: "ana@logistica.test".into(),
                module: Module::Monitoring,
                employee: None,
                operator: None,
                last_login_at: None,
            },
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&stored()).unwrap();
        assert_eq!(store.load().unwrap().unwrap().token, "token-1");
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn new_session_is_anonymous() {
        let session = Session::new(
            ApiClient::new("http://localhost:3000/api/v1").with_token("stale"),
            MemorySessionStore::new(),
        );
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(session.api().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn logout_clears_the_store() {
        let mut session = Session::new(
            ApiClient::new("http://localhost:3000/api/v1"),
            MemorySessionStore::with_session(stored()),
        );
        session.logout();
        assert_eq!(session.store().load().unwrap(), None);
        assert_eq!(session.state(), &SessionState::Anonymous);
    }
}
