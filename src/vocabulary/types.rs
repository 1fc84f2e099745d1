//! Vocabulary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::furigana::strip_furigana;

/// A word saved from the reader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Unique identifier (UUID)
    pub id: String,
    /// The word itself, stored without furigana markup
    pub word: String,
    /// Kana reading
    pub reading: String,
    /// Meaning or translation
    pub meaning: String,
    /// Sentence the word was saved from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Directory of the source text
    #[serde(rename = "sourceDirectory", skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,
    /// File name of the source text
    #[serde(rename = "sourceFile", skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl VocabEntry {
    /// Create a new entry. Furigana markup in the word is stripped so
    /// lookups and display stay consistent.
    pub fn new(word: &str, reading: &str, meaning: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            word: strip_furigana(word),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
            context: None,
            source_directory: None,
            source_file: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the sentence the word came from
    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(strip_furigana(context));
        self
    }

    /// Attach the source text location
    pub fn with_source(mut self, directory: &str, file_name: &str) -> Self {
        self.source_directory = Some(directory.to_string());
        self.source_file = Some(file_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entry_strips_furigana() {
        let entry = VocabEntry::new("薔薇[ばら]", "ばら", "rose");

        assert_eq!(entry.word, "薔薇");
        assert_eq!(entry.reading, "ばら");
        assert!(entry.context.is_none());
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_with_context_and_source() {
        let entry = VocabEntry::new("躊躇", "ちゅうちょ", "hesitation")
            .with_context("彼は躊躇[ちゅうちょ]した。")
            .with_source("novels", "yuki.txt");

        assert_eq!(entry.context.as_deref(), Some("彼は躊躇した。"));
        assert_eq!(entry.source_directory.as_deref(), Some("novels"));
        assert_eq!(entry.source_file.as_deref(), Some("yuki.txt"));
    }

    #[test]
    fn test_serialization() {
        let entry = VocabEntry::new("言葉", "ことば", "word").with_source("novels", "yuki.txt");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("sourceDirectory"));

        // Verify round-trip
        let parsed: VocabEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.word, "言葉");
        assert_eq!(parsed.id, entry.id);
    }
}
