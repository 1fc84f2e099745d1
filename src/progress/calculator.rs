//! Bookmark-to-progress calculation
//!
//! A bookmark is either the verbatim text of an item or a `page:N`
//! sentinel. Matching ignores furigana markup, line breaks and edge
//! whitespace, so a bookmark saved from rendered text still finds its
//! item in the stored source.

use crate::furigana::{count_japanese_chars, strip_furigana};

use super::types::ReadingProgress;

/// Canonical form used for bookmark comparison.
fn normalize(text: &str) -> String {
    strip_furigana(text)
        .replace('\r', "")
        .replace('\n', "")
        .trim()
        .to_string()
}

/// `page:N` with only ASCII digits after the colon. Anything else is an
/// ordinary text bookmark.
fn page_sentinel(bookmark: &str) -> Option<usize> {
    let digits = bookmark.strip_prefix("page:")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Compute progress for `bookmark` within `items`.
///
/// `current_item_index` is 1-based; 0 means no position (empty bookmark,
/// `page:0`, or no matching item). Character counts are Japanese script
/// only, measured on furigana-stripped items.
pub fn calculate_progress(
    items: &[String],
    bookmark: &str,
    items_per_page: usize,
) -> ReadingProgress {
    let bookmark = bookmark.trim();
    if items.is_empty() || bookmark.is_empty() {
        return ReadingProgress::default();
    }

    let counts: Vec<usize> = items
        .iter()
        .map(|item| count_japanese_chars(&strip_furigana(item)))
        .collect();

    if let Some(page) = page_sentinel(bookmark) {
        if page == 0 {
            return ReadingProgress::default();
        }
        let per = items_per_page.max(1);
        let index = (page - 1).saturating_mul(per).min(items.len() - 1);
        return progress_at(index, &counts);
    }

    let target = normalize(bookmark);
    match items.iter().position(|item| normalize(item) == target) {
        Some(index) => progress_at(index, &counts),
        None => ReadingProgress {
            current_item_index: 0,
            total_items: items.len(),
            current_char_count: 0,
            total_char_count: counts.iter().sum(),
            percentage: 0,
        },
    }
}

/// Progress with the item at `index` (0-based) counted as read.
fn progress_at(index: usize, counts: &[usize]) -> ReadingProgress {
    let total: usize = counts.iter().sum();
    let current: usize = counts[..=index].iter().sum();
    let percentage = if total > 0 {
        ((current as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    ReadingProgress {
        current_item_index: index + 1,
        total_items: counts.len(),
        current_char_count: current,
        total_char_count: total,
        percentage,
    }
}
