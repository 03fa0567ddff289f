//! Security Configuration
//!
//! Session settings derived from the admin section of the app config.

use chrono::Duration;
use std::fmt;

use crate::config::config::AdminConfig;
use crate::config::loader::MAX_DURATION_SECS;

/// Seconds as a duration, capped at the longest allowed setting
fn bounded_seconds(secs: u64) -> Duration {
    Duration::seconds(secs.min(MAX_DURATION_SECS) as i64)
}

/// The single admin credential pair
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Session store settings
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub credentials: AdminCredentials,
    /// Token secret for signing
    pub token_secret: String,
    pub token_issuer: String,
    /// Sliding validity window, measured from the last login or refresh
    pub session_ttl: Duration,
    /// Background refresh period
    pub refresh_interval: Duration,
}

impl SessionSettings {
    /// Create development session settings
    pub fn development() -> Self {
        Self::from_admin_config(&crate::config::config::AppConfig::development().admin)
    }

    /// Create from the admin config section
    pub fn from_admin_config(config: &AdminConfig) -> Self {
        Self {
            credentials: AdminCredentials::new(&config.username, &config.password),
            token_secret: config.token_secret.clone(),
            token_issuer: config.token_issuer.clone(),
            session_ttl: bounded_seconds(config.session_ttl_secs),
            refresh_interval: bounded_seconds(config.refresh_interval_secs),
        }
    }

    pub fn session_ttl_millis(&self) -> i64 {
        self.session_ttl.num_milliseconds()
    }

    /// Refresh period as a std duration, for tokio timers
    pub fn refresh_period(&self) -> std::time::Duration {
        self.refresh_interval
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(300))
    }
}
