//! Security Module
//!
//! Admin session handling for the content site:
//! - Session store (login, logout, expiry check, sliding refresh)
//! - Signed session tokens
//! - Background refresh loop
//! - Security middleware

pub mod auth;
pub mod clock;
pub mod config;
pub mod middleware;
pub mod refresh;
pub mod session;
pub mod token;


pub use auth::{AuthError, LoginOutcome, bearer_token};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AdminCredentials, SessionSettings};
pub use refresh::{RefreshHandle, spawn_refresh_loop};
pub use session::{LocalSessionStore, SESSION_STORAGE_KEY, SessionStore};
pub use token::{JwtTokenCodec, SessionToken, TokenCodec};
