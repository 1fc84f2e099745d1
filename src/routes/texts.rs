//! Text library API routes
//!
//! Texts are plain UTF-8 objects under `texts/{directory}/{file_name}`.
//! The page endpoint serves the reader its windowed items; everything else
//! is plain CRUD.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::extract::extract_items;
use crate::furigana::strip_furigana;
use crate::progress::total_pages;
use crate::state::AppState;
use crate::storage::{bookmark_key, text_key};

/// Create the texts router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:directory", get(list_texts))
        .route("/:directory/:file_name", get(get_text))
        .route("/:directory/:file_name", put(put_text))
        .route("/:directory/:file_name", delete(delete_text))
        .route("/:directory/:file_name/page/:page", get(get_text_page))
}

/// Summary of one stored text
#[derive(Serialize)]
pub struct TextSummary {
    pub directory: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub size: i64,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A complete text with its item counts
#[derive(Serialize)]
pub struct TextResponse {
    pub directory: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub content: String,
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// One reader page of items
#[derive(Serialize)]
pub struct TextPageResponse {
    pub directory: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    pub items: Vec<String>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    /// Strip furigana markup from the returned items
    #[serde(default)]
    pub plain: bool,
}

/// List texts in a directory
async fn list_texts(
    State(state): State<AppState>,
    Path(directory): Path<String>,
) -> Result<Json<Vec<TextSummary>>> {
    let prefix = format!("texts/{}/", directory);
    let objects = state.s3_client().list_all_objects(Some(&prefix)).await?;

    let texts = objects
        .into_iter()
        .filter_map(|meta| {
            meta.key.strip_prefix(&prefix).map(|name| TextSummary {
                directory: directory.clone(),
                file_name: name.to_string(),
                size: meta.size,
                updated_at: meta.last_modified,
            })
        })
        .collect();

    Ok(Json(texts))
}

/// Get a complete text
async fn get_text(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
) -> Result<Json<TextResponse>> {
    let object = state
        .s3_client()
        .get_object(&text_key(&directory, &file_name))
        .await?;
    let content = String::from_utf8(object.data)?;

    let items = extract_items(&content);

    Ok(Json(TextResponse {
        total_items: items.len(),
        total_pages: total_pages(items.len(), state.items_per_page()),
        directory,
        file_name,
        content,
    }))
}

/// Upload or replace a text
async fn put_text(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
    body: String,
) -> Result<StatusCode> {
    if body.trim().is_empty() {
        return Err(AppError::BadRequest("Text body is empty".to_string()));
    }

    state
        .s3_client()
        .put_object(
            &text_key(&directory, &file_name),
            body.into_bytes(),
            "text/plain; charset=utf-8",
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a text and its bookmark sidecar
async fn delete_text(
    State(state): State<AppState>,
    Path((directory, file_name)): Path<(String, String)>,
) -> Result<StatusCode> {
    let key = text_key(&directory, &file_name);
    if !state.s3_client().object_exists(&key).await? {
        return Err(AppError::NotFound(format!(
            "Text not found: {}/{}",
            directory, file_name
        )));
    }

    state.s3_client().delete_object(&key).await?;
    let _ = state
        .s3_client()
        .delete_object(&bookmark_key(&directory, &file_name))
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get one page of reader items
async fn get_text_page(
    State(state): State<AppState>,
    Path((directory, file_name, page)): Path<(String, String, usize)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<TextPageResponse>> {
    if page == 0 {
        return Err(AppError::BadRequest("Pages are numbered from 1".to_string()));
    }

    let object = state
        .s3_client()
        .get_object(&text_key(&directory, &file_name))
        .await?;
    let content = String::from_utf8(object.data)?;

    let items = extract_items(&content);
    let total_items = items.len();
    let per = state.items_per_page().max(1);

    // A page past the end is not an error, just empty
    let mut page_items: Vec<String> = items
        .into_iter()
        .skip((page - 1).saturating_mul(per))
        .take(per)
        .collect();

    if query.plain {
        page_items = page_items.iter().map(|item| strip_furigana(item)).collect();
    }

    Ok(Json(TextPageResponse {
        directory,
        file_name,
        page,
        total_pages: total_pages(total_items, per),
        total_items,
        items: page_items,
    }))
}
