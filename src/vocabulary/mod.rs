//! Vocabulary notebook
//!
//! Words saved while reading, persisted as JSON objects under the
//! `vocabulary/` key family.

mod store;
mod types;

pub use store::VocabRepository;
pub use types::VocabEntry;
