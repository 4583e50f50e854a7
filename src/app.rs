use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::votes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: SqlitePool,
}

/// Credentialed CORS forbids wildcards, so methods and headers are mirrored
/// from the preflight request instead.
fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.frontend_origin.clone());

    Router::new()
        // Health check
        .route("/health", get(votes::health_check))
        // Catalog and votes
        .route("/images", get(votes::list_images))
        .route("/vote", post(votes::cast_vote))
        .route("/export-votes", get(votes::export_votes))
        .route("/reset-votes", post(votes::reset_votes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
