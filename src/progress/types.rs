use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position and character counts for a bookmark within a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    pub current_item_index: usize,
    pub total_items: usize,
    pub current_char_count: usize,
    pub total_char_count: usize,
    pub percentage: u32,
}

/// Stored bookmark, kept as a JSON sidecar next to the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub bookmark: String,
    pub updated_at: DateTime<Utc>,
}

impl BookmarkRecord {
    pub fn new(bookmark: impl Into<String>) -> Self {
        Self {
            bookmark: bookmark.into(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_serializes_camel_case() {
        let progress = ReadingProgress {
            current_item_index: 2,
            total_items: 10,
            current_char_count: 30,
            total_char_count: 100,
            percentage: 30,
        };
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["currentItemIndex"], 2);
        assert_eq!(json["totalCharCount"], 100);
        assert_eq!(json["percentage"], 30);
    }

    #[test]
    fn test_bookmark_record_round_trip() {
        let record = BookmarkRecord::new("page:3");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("updatedAt"));

        let back: BookmarkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
