//! Content Routes
//!
//! 定义公开内容的 API 路由。

use crate::api::handlers::content_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建内容路由器
pub fn create_content_router() -> Router<AppState> {
    Router::new()
        .route("/events", get(homepage))
        .route("/events/:id", get(get_event))
        .route("/events/:id/agenda", get(get_agenda))
        .route("/events/:id/speakers", get(get_speakers))
        .route("/events/:id/partners", get(get_partners))
        .route("/events/:id/topics", get(get_topics))
        .route("/events/:id/resources", get(get_resources))
        .route("/events/:id/photos", get(get_photos))
        .route("/events/:id/faqs", get(get_faqs))
}
