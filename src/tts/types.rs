//! Speech synthesis types

use serde::{Deserialize, Serialize};

/// Speech synthesis provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// VOICEVOX engine (local)
    Voicevox,
}

impl Default for TtsProvider {
    fn default() -> Self {
        Self::Voicevox
    }
}

/// Speech synthesis error types
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("Speech provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl TtsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::ProviderNotAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
