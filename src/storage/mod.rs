//! Storage module for S3-compatible backends
//!
//! Supports MinIO, Cloudflare R2, Backblaze B2, and AWS S3. Objects live
//! under three key families: `texts/` for the texts themselves,
//! `bookmarks/` for their JSON sidecars, and `vocabulary/` for saved
//! words.

mod s3_client;
mod types;

pub use s3_client::S3Client;
pub use types::*;

/// Key for a stored text
pub fn text_key(directory: &str, file_name: &str) -> String {
    format!("texts/{}/{}", directory, file_name)
}

/// Key for the bookmark sidecar of a text
pub fn bookmark_key(directory: &str, file_name: &str) -> String {
    format!("bookmarks/{}/{}.json", directory, file_name)
}

/// Key for a vocabulary entry
pub fn vocab_key(id: &str) -> String {
    format!("vocabulary/{}.json", id)
}
