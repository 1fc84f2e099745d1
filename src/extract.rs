//! Reading-item extraction
//!
//! Detects whether a stored text uses the dialect format and slices it
//! into the items the reader pages through: dialect heads, or blank-line
//! separated paragraphs for plain text.

use crate::dialect::{is_heading_line, parse_dialect};

/// A text is dialect-formatted when any line carries a variant or heading
/// marker. Ruby markup alone does not qualify.
///
/// Known limitation: a plain text quoting a literal `>>` is classified as
/// dialect. Detection does not guess beyond the markers.
pub fn is_dialect_format(text: &str) -> bool {
    text.contains(">>") || text.lines().any(is_heading_line)
}

/// Split a text into reading items.
///
/// Dialect texts yield one item per parsed head, kept verbatim. Plain
/// texts yield trimmed paragraphs split on blank lines.
pub fn extract_items(text: &str) -> Vec<String> {
    if is_dialect_format(text) {
        parse_dialect(text)
            .into_iter()
            .map(|item| item.head)
            .collect()
    } else {
        split_paragraphs(text)
    }
}

fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut paragraphs, std::mem::take(&mut current));
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_paragraph(&mut paragraphs, current);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<String>, paragraph: String) {
    let trimmed = paragraph.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_dialect_by_variant_marker() {
        assert!(is_dialect_format("何か\n>>変種"));
    }

    #[test]
    fn test_detects_dialect_by_heading_marker() {
        assert!(is_dialect_format("<見出し\n本文"));
        assert!(is_dialect_format("＜見出し"));
    }

    #[test]
    fn test_ruby_only_text_is_plain() {
        let text = "<ruby>漢字<rt>かんじ</rt></ruby>の文章。";
        assert!(!is_dialect_format(text));
        assert_eq!(extract_items(text), vec![text.to_string()]);
    }

    #[test]
    fn test_dialect_items_use_heads() {
        let items = extract_items("<今日は良い天気です。\n>>今日は晴れです。\n>>天気がいいです。\n");
        assert_eq!(items, vec!["今日は良い天気です。"]);
    }

    #[test]
    fn test_plain_text_splits_on_blank_lines() {
        let items = extract_items("第一段落。\n\n第二段落。");
        assert_eq!(items, vec!["第一段落。", "第二段落。"]);
    }

    #[test]
    fn test_paragraph_keeps_inner_line_breaks() {
        let items = extract_items("一行目\n二行目\n\n次の段落");
        assert_eq!(items, vec!["一行目\n二行目", "次の段落"]);
    }

    #[test]
    fn test_consecutive_blank_lines() {
        let items = extract_items("一\n\n\n\n二");
        assert_eq!(items, vec!["一", "二"]);
    }

    #[test]
    fn test_whitespace_only_text() {
        assert!(extract_items("").is_empty());
        assert!(extract_items("  \n\n  ").is_empty());
    }
}
