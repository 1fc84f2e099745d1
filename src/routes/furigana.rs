//! Furigana API routes
//!
//! Pure text transforms exposed for clients that handle their own storage.

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::furigana::{add_furigana, strip_furigana};
use crate::state::AppState;

/// Create the furigana router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/strip", post(strip))
        .route("/annotate", post(annotate))
}

#[derive(Deserialize)]
pub struct TextBody {
    pub text: String,
}

#[derive(Serialize)]
pub struct TextResult {
    pub text: String,
}

/// Remove bracket and ruby annotations
async fn strip(Json(body): Json<TextBody>) -> Json<TextResult> {
    Json(TextResult {
        text: strip_furigana(&body.text),
    })
}

/// Wrap uncommon kanji runs in ruby markup
async fn annotate(Json(body): Json<TextBody>) -> Json<TextResult> {
    Json(TextResult {
        text: add_furigana(&body.text),
    })
}
