//! Session tokens
//!
//! The stored token carries the admin username, the session ID and the
//! epoch-millisecond timestamp of the last login or refresh. The session ID is
//! minted at login and kept across refreshes. Tokens are HS256-signed JWTs, so
//! a tampered or foreign value fails to decode and is treated as corrupt.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::security::auth::AuthError;

/// Decoded session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub username: String,
    /// Stable for the lifetime of one login
    pub session_id: String,
    /// Epoch milliseconds of issue or last refresh
    pub timestamp: i64,
}

impl SessionToken {
    /// Start a new session
    pub fn new(username: &str, timestamp: i64) -> Self {
        Self {
            username: username.to_string(),
            session_id: Uuid::new_v4().to_string(),
            timestamp,
        }
    }

    /// Same session, re-stamped at `timestamp`
    pub fn refreshed(&self, timestamp: i64) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    /// Whether both tokens belong to the same login
    pub fn same_session(&self, other: &SessionToken) -> bool {
        self.session_id == other.session_id && self.username == other.username
    }

    /// Age of the token at `now_millis`
    pub fn age_millis(&self, now_millis: i64) -> i64 {
        now_millis - self.timestamp
    }
}

/// Encodes session tokens into their stored string form and back
pub trait TokenCodec: Send + Sync {
    fn encode(&self, token: &SessionToken) -> Result<String, AuthError>;
    fn decode(&self, raw: &str) -> Result<SessionToken, AuthError>;
}

/// JWT claims for a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenClaims {
    username: String,
    timestamp: i64,
    iss: String,
    /// Issued at, epoch seconds
    iat: i64,
    /// Session ID
    jti: String,
}

/// HS256 JWT codec
///
/// Expiry is not encoded as `exp`: the session store decides it from
/// `timestamp` against its own clock.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtTokenCodec {
    pub fn new(secret: &str, issuer: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
        }
    }

    /// Create a development codec
    pub fn development() -> Self {
        Self::new("dev-secret-change-in-production-min-32-chars", "statcon")
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.clone()]);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation
    }
}

impl std::fmt::Debug for JwtTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenCodec")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenCodec for JwtTokenCodec {
    fn encode(&self, token: &SessionToken) -> Result<String, AuthError> {
        let claims = TokenClaims {
            username: token.username.clone(),
            timestamp: token.timestamp,
            iss: self.issuer.clone(),
            iat: Utc::now().timestamp(),
            jti: token.session_id.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCorrupt(format!("failed to sign token: {}", e)))
    }

    fn decode(&self, raw: &str) -> Result<SessionToken, AuthError> {
        decode::<TokenClaims>(raw, &self.decoding_key, &self.validation())
            .map(|data| SessionToken {
                username: data.claims.username,
                session_id: data.claims.jti,
                timestamp: data.claims.timestamp,
            })
            .map_err(|e| AuthError::TokenCorrupt(e.to_string()))
    }
}
