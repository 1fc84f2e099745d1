//! Vocabulary API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::vocabulary::{VocabEntry, VocabRepository};

/// Create the vocabulary router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries))
        .route("/", post(create_entry))
        .route("/:id", delete(delete_entry))
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// New vocabulary entry payload
#[derive(Deserialize)]
pub struct NewEntry {
    pub word: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, rename = "sourceDirectory")]
    pub source_directory: Option<String>,
    #[serde(default, rename = "sourceFile")]
    pub source_file: Option<String>,
}

/// List saved words, newest first
async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<VocabEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let repo = VocabRepository::new(state.s3_client());

    let entries = repo.list().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(entries))
}

/// Save a new word
async fn create_entry(
    State(state): State<AppState>,
    Json(req): Json<NewEntry>,
) -> Result<(StatusCode, Json<VocabEntry>), (StatusCode, Json<ErrorResponse>)> {
    if req.word.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "word must not be empty".to_string(),
            }),
        ));
    }

    let mut entry = VocabEntry::new(&req.word, &req.reading, &req.meaning);
    if let Some(ref context) = req.context {
        entry = entry.with_context(context);
    }
    if let (Some(dir), Some(file)) = (&req.source_directory, &req.source_file) {
        entry = entry.with_source(dir, file);
    }

    let repo = VocabRepository::new(state.s3_client());
    repo.save(&entry).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete a saved word
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let repo = VocabRepository::new(state.s3_client());

    let deleted = repo.delete(&id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No vocabulary entry: {}", id),
            }),
        ))
    }
}
