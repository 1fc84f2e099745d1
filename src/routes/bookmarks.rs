//! Bookmark API routes
//!
//! One bookmark per text, stored as a JSON sidecar object.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::progress::BookmarkRecord;
use crate::state::AppState;
use crate::storage::{bookmark_key, text_key};

/// Create the bookmarks router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:directory/:file_name", get(get_bookmark))
        .route("/:directory/:file_name", put(put_bookmark))
        .route("/:directory/:file_name", delete(delete_bookmark))
}

#[derive(Deserialize)]
pub struct BookmarkUpdate {
    pub bookmark: String,
}

/// Get the stored bookmark for a text
async fn get_bookmark(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
) -> Result<Json<BookmarkRecord>> {
    let object = state
        .s3_client()
        .get_object(&bookmark_key(&directory, &file_name))
        .await?;

    let record: BookmarkRecord = serde_json::from_slice(&object.data)
        .map_err(|e| AppError::Internal(format!("Corrupt bookmark record: {}", e)))?;

    Ok(Json(record))
}

/// Set the bookmark for a text
async fn put_bookmark(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
    Json(update): Json<BookmarkUpdate>,
) -> Result<Json<BookmarkRecord>> {
    if !state
        .s3_client()
        .object_exists(&text_key(&directory, &file_name))
        .await?
    {
        return Err(AppError::NotFound(format!(
            "Text not found: {}/{}",
            directory, file_name
        )));
    }

    let record = BookmarkRecord::new(update.bookmark);
    let data = serde_json::to_vec(&record)
        .map_err(|e| AppError::Internal(format!("Failed to encode bookmark: {}", e)))?;

    state
        .s3_client()
        .put_object(
            &bookmark_key(&directory, &file_name),
            data,
            "application/json",
        )
        .await?;

    Ok(Json(record))
}

/// Delete the bookmark for a text
async fn delete_bookmark(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
) -> Result<StatusCode> {
    let key = bookmark_key(&directory, &file_name);
    if !state.s3_client().object_exists(&key).await? {
        return Err(AppError::NotFound(format!(
            "No bookmark for: {}/{}",
            directory, file_name
        )));
    }

    state.s3_client().delete_object(&key).await?;

    Ok(StatusCode::NO_CONTENT)
}
