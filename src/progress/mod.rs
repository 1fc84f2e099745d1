//! Reading progress
//!
//! Bookmarks, the progress they resolve to, and the page math the reader
//! uses to window long texts.

mod calculator;
mod pagination;
mod types;

pub use calculator::calculate_progress;
pub use pagination::{page_of, total_pages};
pub use types::{BookmarkRecord, ReadingProgress};
