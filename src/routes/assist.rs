//! Reading assist API routes

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::dialect::ParsedItem;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the assist router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/explain", post(explain))
        .route("/paraphrase", post(paraphrase))
}

#[derive(Deserialize)]
pub struct SentenceBody {
    pub sentence: String,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Serialize)]
pub struct ParaphraseResponse {
    pub items: Vec<ParsedItem>,
}

/// Explain a sentence in simple Japanese
async fn explain(
    State(state): State<AppState>,
    Json(body): Json<SentenceBody>,
) -> Result<Json<ExplainResponse>> {
    if body.sentence.trim().is_empty() {
        return Err(AppError::BadRequest("Sentence is empty".to_string()));
    }

    let explanation = state.assist().explain(&body.sentence).await?;
    Ok(Json(ExplainResponse { explanation }))
}

/// Paraphrase a sentence into simpler variants
async fn paraphrase(
    State(state): State<AppState>,
    Json(body): Json<SentenceBody>,
) -> Result<Json<ParaphraseResponse>> {
    if body.sentence.trim().is_empty() {
        return Err(AppError::BadRequest("Sentence is empty".to_string()));
    }

    let items = state.assist().paraphrase(&body.sentence).await?;
    Ok(Json(ParaphraseResponse { items }))
}
