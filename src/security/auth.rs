//! Authentication Module
//!
//! Error taxonomy and login results shared by session store implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for any rejected login attempt
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Message returned when a login matched but the token could not be stored
pub const SESSION_UNAVAILABLE_MESSAGE: &str = "Unable to start admin session";

/// Session token failures
///
/// None of these reach a caller: they collapse into "not authenticated" at the
/// session store boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("session token expired {age_ms}ms after issue")]
    TokenExpired { age_ms: i64 },

    #[error("session token unreadable: {0}")]
    TokenCorrupt(String),

    #[error("session storage failure: {0}")]
    Storage(String),
}

impl From<crate::error::AppError> for AuthError {
    fn from(e: crate::error::AppError) -> Self {
        AuthError::Storage(e.to_string())
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The token stored by this login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginOutcome {
    pub fn accepted(token: String) -> Self {
        Self {
            success: true,
            message: None,
            token: Some(token),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            token: None,
        }
    }
}

/// Extract a bearer token from an Authorization header value
pub fn bearer_token(auth_header: Option<&str>) -> Option<&str> {
    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = header[7..].trim();
            (!token.is_empty()).then_some(token)
        }
        _ => None,
    }
}
