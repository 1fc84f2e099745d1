//! Speech synthesis API routes

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::furigana::strip_furigana;
use crate::state::AppState;
use crate::tts::TtsError;

/// Create the tts router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(synthesize))
}

#[derive(Deserialize)]
pub struct SpeechBody {
    pub text: String,
}

/// Synthesize speech for a piece of text, returning WAV bytes
async fn synthesize(
    State(state): State<AppState>,
    Json(body): Json<SpeechBody>,
) -> Result<impl IntoResponse> {
    if body.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is empty".to_string()));
    }

    if !state.tts().is_available().await {
        return Err(AppError::Speech(TtsError::ProviderNotAvailable(format!(
            "{:?} provider is not available",
            state.tts().provider_type()
        ))));
    }

    // The engine should speak the base text, not the markup
    let plain = strip_furigana(&body.text);
    let audio = state.tts().synthesize(&plain).await?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], audio))
}
