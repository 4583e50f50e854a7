use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::app::AppState;
use crate::db::{self, ImageVotes, VoteType};
use crate::error::ApiError;
use crate::votes::export::render_csv;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    image_id: i64,
    vote_type: String,
}

pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ImageVotes>>, ApiError> {
    let images = db::list_image_votes(&state.db).await?;
    Ok(Json(images))
}

pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = payload?;

    // The vote type is validated before the image lookup.
    let vote_type: VoteType = request.vote_type.parse()?;

    if !db::image_exists(&state.db, request.image_id).await? {
        return Err(ApiError::ImageNotFound(request.image_id));
    }

    let vote_id = db::insert_vote(&state.db, request.image_id, vote_type).await?;
    tracing::debug!(
        "Recorded vote {} ({}) on image {}",
        vote_id,
        vote_type,
        request.image_id
    );

    Ok(Json(json!({ "message": "Vote recorded successfully" })))
}

pub async fn export_votes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let images = db::list_image_votes(&state.db).await?;
    let body = render_csv(&images)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=votes.csv"),
        ],
        body,
    ))
}

pub async fn reset_votes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = db::delete_all_votes(&state.db).await?;
    tracing::info!("Reset votes, {} rows deleted", deleted);

    Ok(Json(json!({ "message": "All votes have been reset" })))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "picsfeed_api"
    }))
}
