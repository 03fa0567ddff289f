use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::content_dto::SpeakersParams},
    error::AppError,
};

pub async fn homepage(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let home = state.content_service.homepage().await?;
    Ok(Json(home))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting landing page: {}", id);
    let page = state.content_service.landing_page(&id).await?;
    Ok(Json(page))
}

pub async fn get_agenda(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.agenda(&id).await?))
}

pub async fn get_speakers(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SpeakersParams>,
) -> Result<impl IntoResponse, AppError> {
    let featured_only = params.featured.unwrap_or(false);
    Ok(Json(
        state.content_service.speakers(&id, featured_only).await?,
    ))
}

pub async fn get_partners(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.partners(&id).await?))
}

pub async fn get_topics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.topics(&id).await?))
}

pub async fn get_resources(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.resources(&id).await?))
}

pub async fn get_photos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.photos(&id).await?))
}

pub async fn get_faqs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.content_service.faqs(&id).await?))
}
