//! HTTP API routes

pub mod assist;
pub mod bookmarks;
pub mod furigana;
pub mod health;
pub mod progress;
pub mod texts;
pub mod tts;
pub mod vocabulary;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/texts", texts::router())
        .nest("/api/v1/bookmarks", bookmarks::router())
        .nest("/api/v1/progress", progress::router())
        .nest("/api/v1/furigana", furigana::router())
        .nest("/api/v1/assist", assist::router())
        .nest("/api/v1/tts", tts::router())
        .nest("/api/v1/vocabulary", vocabulary::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
