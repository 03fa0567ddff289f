//! Admin session store
//!
//! A single admin session lives under one fixed storage key. Logging in
//! overwrites it, logout deletes it, and every check that finds it expired or
//! unreadable deletes it as a side effect. Storage and decode failures never
//! reach the caller: they read as "not authenticated".

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::security::auth::{
    AuthError, INVALID_CREDENTIALS_MESSAGE, LoginOutcome, SESSION_UNAVAILABLE_MESSAGE,
};
use crate::security::clock::{Clock, SystemClock};
use crate::security::config::{AdminCredentials, SessionSettings};
use crate::security::token::{JwtTokenCodec, SessionToken, TokenCodec};
use crate::storage::kv::{KeyValueStore, MemoryKeyValueStore};

/// Storage key holding the admin session token
pub const SESSION_STORAGE_KEY: &str = "statcon.admin.session";

/// Session store trait
///
/// Handlers and middleware depend on this trait only, so the backing storage
/// and token format can change without touching callers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Check credentials and, on success, replace the stored session
    async fn login(&self, username: &str, password: &str) -> LoginOutcome;

    /// Delete the stored session
    async fn logout(&self);

    /// Whether a readable, unexpired session is stored
    async fn is_authenticated(&self) -> bool;

    /// Re-stamp the stored session with the current time, returning the
    /// re-issued token. Tokens handed out earlier for the same login stay valid.
    async fn refresh_session(&self) -> Option<String>;

    /// Re-stamp the stored session with the current time
    async fn refresh_token(&self) -> bool {
        self.refresh_session().await.is_some()
    }

    /// The raw stored token, if any
    async fn current_token(&self) -> Option<String>;

    /// Whether `presented` belongs to the stored session and that session is
    /// still valid
    async fn authorize(&self, presented: &str) -> bool;
}

/// Session store over a key-value storage backend
pub struct LocalSessionStore {
    storage: Arc<dyn KeyValueStore>,
    codec: Arc<dyn TokenCodec>,
    clock: Arc<dyn Clock>,
    credentials: AdminCredentials,
    ttl_millis: i64,
}

impl LocalSessionStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        codec: Arc<dyn TokenCodec>,
        clock: Arc<dyn Clock>,
        credentials: AdminCredentials,
        ttl_millis: i64,
    ) -> Self {
        Self {
            storage,
            codec,
            clock,
            credentials,
            ttl_millis,
        }
    }

    /// Create from session settings with the wall clock
    pub fn from_settings(settings: &SessionSettings, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            storage,
            Arc::new(JwtTokenCodec::new(
                &settings.token_secret,
                &settings.token_issuer,
            )),
            Arc::new(SystemClock),
            settings.credentials.clone(),
            settings.session_ttl_millis(),
        )
    }

    /// Create a development store backed by process memory
    pub fn development() -> Self {
        Self::from_settings(
            &SessionSettings::development(),
            Arc::new(MemoryKeyValueStore::new()),
        )
    }

    /// Encode and store `token`, returning its stored form
    async fn store(&self, token: &SessionToken) -> Result<String, AuthError> {
        let raw = self.codec.encode(token)?;
        self.storage.set(SESSION_STORAGE_KEY, &raw).await?;
        Ok(raw)
    }

    fn verify(&self, raw: &str) -> Result<SessionToken, AuthError> {
        let token = self.codec.decode(raw)?;
        let age_ms = token.age_millis(self.clock.now_millis());
        if age_ms > self.ttl_millis {
            return Err(AuthError::TokenExpired { age_ms });
        }
        Ok(token)
    }

    async fn load(&self) -> Result<Option<(String, SessionToken)>, AuthError> {
        let Some(raw) = self.storage.get(SESSION_STORAGE_KEY).await? else {
            return Ok(None);
        };
        let token = self.verify(&raw)?;
        Ok(Some((raw, token)))
    }

    /// Load the stored session, clearing it when it is expired or unreadable
    async fn check(&self) -> Option<(String, SessionToken)> {
        match self.load().await {
            Ok(found) => found,
            Err(e) => {
                match &e {
                    AuthError::TokenExpired { age_ms } => {
                        info!(age_ms, "Admin session expired")
                    }
                    AuthError::Storage(_) => warn!(error = %e, "Admin session unreadable"),
                    _ => debug!(error = %e, "Discarding admin session token"),
                }
                self.clear().await;
                None
            }
        }
    }

    async fn clear(&self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY).await {
            warn!(error = %e, "Failed to remove admin session token");
        }
    }
}

impl std::fmt::Debug for LocalSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSessionStore")
            .field("storage", &"Arc<dyn KeyValueStore>")
            .field("codec", &"Arc<dyn TokenCodec>")
            .field("clock", &"Arc<dyn Clock>")
            .field("credentials", &self.credentials)
            .field("ttl_millis", &self.ttl_millis)
            .finish()
    }
}

#[async_trait]
impl SessionStore for LocalSessionStore {
    async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        if !self.credentials.matches(username, password) {
            info!(username, "Admin login rejected");
            return LoginOutcome::rejected(INVALID_CREDENTIALS_MESSAGE);
        }

        let token = SessionToken::new(username, self.clock.now_millis());
        match self.store(&token).await {
            Ok(raw) => {
                info!(username, "Admin logged in");
                LoginOutcome::accepted(raw)
            }
            Err(e) => {
                error!(username, error = %e, "Failed to store admin session");
                LoginOutcome::rejected(SESSION_UNAVAILABLE_MESSAGE)
            }
        }
    }

    async fn logout(&self) {
        self.clear().await;
        info!("Admin logged out");
    }

    async fn is_authenticated(&self) -> bool {
        self.check().await.is_some()
    }

    async fn refresh_session(&self) -> Option<String> {
        let (_, token) = self.check().await?;

        match self.store(&token.refreshed(self.clock.now_millis())).await {
            Ok(raw) => {
                debug!(username = %token.username, "Admin session refreshed");
                Some(raw)
            }
            Err(e) => {
                warn!(error = %e, "Failed to refresh admin session");
                self.clear().await;
                None
            }
        }
    }

    async fn current_token(&self) -> Option<String> {
        self.check().await.map(|(raw, _)| raw)
    }

    async fn authorize(&self, presented: &str) -> bool {
        let Ok(claimed) = self.codec.decode(presented) else {
            return false;
        };
        matches!(self.check().await, Some((_, current)) if current.same_session(&claimed))
    }
}
