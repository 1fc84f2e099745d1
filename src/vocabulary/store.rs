//! S3 persistence for vocabulary entries
//!
//! Each entry is one JSON object under the `vocabulary/` prefix.

use anyhow::Result;

use crate::error::{AppError, StorageError};
use crate::storage::{vocab_key, S3Client};

use super::types::VocabEntry;

/// Repository for vocabulary persistence
pub struct VocabRepository<'a> {
    store: &'a S3Client,
}

impl<'a> VocabRepository<'a> {
    /// Create a new repository
    pub fn new(store: &'a S3Client) -> Self {
        Self { store }
    }

    /// Save an entry (insert or replace)
    pub async fn save(&self, entry: &VocabEntry) -> Result<()> {
        let data = serde_json::to_vec(entry)?;
        self.store
            .put_object(&vocab_key(&entry.id), data, "application/json")
            .await?;

        Ok(())
    }

    /// Get an entry by ID
    pub async fn get(&self, id: &str) -> Result<Option<VocabEntry>> {
        match self.store.get_object(&vocab_key(id)).await {
            Ok(object) => Ok(Some(serde_json::from_slice(&object.data)?)),
            Err(AppError::Storage(StorageError::ObjectNotFound(_))) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all entries, newest first
    pub async fn list(&self) -> Result<Vec<VocabEntry>> {
        let objects = self.store.list_all_objects(Some("vocabulary/")).await?;

        let fetches = objects.iter().map(|meta| self.store.get_object(&meta.key));

        let mut entries = Vec::new();
        for result in futures::future::join_all(fetches).await {
            match result {
                Ok(object) => match serde_json::from_slice::<VocabEntry>(&object.data) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable vocabulary entry: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Skipping unreadable vocabulary entry: {}", e);
                }
            }
        }

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    /// Delete an entry. Returns whether it existed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let key = vocab_key(id);
        if !self.store.object_exists(&key).await? {
            return Ok(false);
        }
        self.store.delete_object(&key).await?;

        Ok(true)
    }
}
