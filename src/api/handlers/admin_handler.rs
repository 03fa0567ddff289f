use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::admin_dto::*},
    error::AppError,
};

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    debug!("Admin login attempt: {}", request.username);

    let outcome = state
        .session_store
        .login(&request.username, &request.password)
        .await;

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    let response = LoginResponse {
        success: outcome.success,
        message: outcome.message,
        token: outcome.token,
    };
    (status, Json(response))
}

/// 登出，需要有效的管理员令牌
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.session_store.logout().await;
    StatusCode::NO_CONTENT
}

pub async fn session_status(State(state): State<AppState>) -> impl IntoResponse {
    let response = SessionStatusResponse {
        authenticated: state.session_store.is_authenticated().await,
    };
    Json(response)
}

/// 刷新会话，需要有效的管理员令牌
pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    let token = state.session_store.refresh_session().await;
    let status = if token.is_some() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    let response = RefreshResponse {
        refreshed: token.is_some(),
        token,
    };
    (status, Json(response))
}

/// 管理端活动列表，包含未发布活动
pub async fn list_all_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.content_service.all_events().await?;
    Ok(Json(events))
}
