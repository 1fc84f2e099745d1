//! Assist types
//!
//! Types for the LLM-backed reading assist features.

use serde::{Deserialize, Serialize};

/// Assist provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistProvider {
    /// Ollama text model (local LLM)
    Ollama,
}

impl Default for AssistProvider {
    fn default() -> Self {
        Self::Ollama
    }
}

/// Assist error types
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Assist provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl AssistError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::ProviderNotAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
