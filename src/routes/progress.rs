//! Reading progress API routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result, StorageError};
use crate::extract::extract_items;
use crate::progress::{calculate_progress, page_of, total_pages, BookmarkRecord, ReadingProgress};
use crate::state::AppState;
use crate::storage::{bookmark_key, text_key};

/// Create the progress router
pub fn router() -> Router<AppState> {
    Router::new().route("/:directory/:file_name", get(get_progress))
}

/// Progress plus the reader page it maps to
#[derive(Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub progress: ReadingProgress,
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Compute progress for a text from its stored bookmark
async fn get_progress(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
) -> Result<Json<ProgressResponse>> {
    let object = state
        .s3_client()
        .get_object(&text_key(&directory, &file_name))
        .await?;
    let content = String::from_utf8(object.data)?;

    // A missing or corrupt bookmark means zero progress, not an error
    let bookmark = match state
        .s3_client()
        .get_object(&bookmark_key(&directory, &file_name))
        .await
    {
        Ok(object) => match serde_json::from_slice::<BookmarkRecord>(&object.data) {
            Ok(record) => record.bookmark,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt bookmark for {}/{}: {}",
                    directory,
                    file_name,
                    e
                );
                String::new()
            }
        },
        Err(AppError::Storage(StorageError::ObjectNotFound(_))) => String::new(),
        Err(e) => return Err(e),
    };

    let items = extract_items(&content);
    let per = state.items_per_page();
    let progress = calculate_progress(&items, &bookmark, per);

    let pages = total_pages(items.len(), per).max(1);
    let page = if progress.current_item_index > 0 {
        page_of(progress.current_item_index - 1, per).min(pages)
    } else {
        1
    };

    Ok(Json(ProgressResponse {
        progress,
        page,
        total_pages: pages,
    }))
}
