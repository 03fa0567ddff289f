//! Admin Routes
//!
//! 定义管理员会话和管理端内容的 API 路由。

use crate::api::handlers::admin_handler::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::security::middleware::admin_guard;

/// 创建管理端路由器
///
/// 登录和状态接口公开；登出、刷新及其余接口需要有效的管理员令牌。
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/admin/logout", post(logout))
        .route("/admin/refresh", post(refresh))
        .route("/admin/events", get(list_all_events))
        .route_layer(middleware::from_fn_with_state(state, admin_guard));

    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/session", get(session_status))
        .merge(guarded)
}
