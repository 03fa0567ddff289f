//! Security Middleware Module
//!
//! Provides Axum middleware for the admin guard and security headers.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::result::Result as StdResult;
use tracing::debug;

use crate::api::app_state::AppState;
use crate::error::AppError;
use crate::security::auth::bearer_token;

/// Admin guard middleware
///
/// Lets the request through only when its bearer token is the currently
/// stored admin session token and that session has not expired.
pub async fn admin_guard(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> StdResult<Response, AppError> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| bearer_token(Some(h)))
        .map(str::to_string);

    let Some(presented) = presented else {
        return Err(AppError::Authentication(
            "Missing admin bearer token".to_string(),
        ));
    };

    if !state.session_store.authorize(&presented).await {
        debug!(path = %req.uri().path(), "Rejected admin request");
        return Err(AppError::Authentication(
            "Admin session is not valid".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

/// Security headers middleware
pub async fn security_headers_middleware(
    req: Request<Body>,
    next: Next,
) -> StdResult<Response, StatusCode> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Strict-Transport-Security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    Ok(response)
}
