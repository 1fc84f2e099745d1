//! Dialect-format parser
//!
//! A line-oriented scan: `<` (or full-width `＜`) starts a heading, `>>`
//! adds a variant to the current item, blank lines are skipped, and other
//! lines either recover a missing heading marker or continue the previous
//! line.

use tracing::{debug, warn};

use super::types::ParsedItem;

/// Which slot the previous significant line went to.
enum PrevLine {
    None,
    Heading,
    Variant,
}

/// Tag openers that look like heading markers but belong to ruby markup.
const RUBY_TAG_PREFIXES: [&str; 6] = ["<ruby", "<rt", "<rb", "</ruby", "</rt", "</rb"];

pub(crate) fn is_heading_line(line: &str) -> bool {
    if !line.starts_with('<') && !line.starts_with('＜') {
        return false;
    }
    !RUBY_TAG_PREFIXES.iter().any(|tag| line.starts_with(tag))
}

fn is_variant_line(line: &str) -> bool {
    line.starts_with(">>")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn strip_heading_prefix(line: &str) -> &str {
    line.strip_prefix('<')
        .or_else(|| line.strip_prefix('＜'))
        .unwrap_or(line)
}

/// A plain line is taken as a heading that lost its marker when enough
/// variant lines follow it: four in a row, or three in a row with a later
/// fourth separated only by blank lines.
fn looks_like_unmarked_heading(rest: &[&str]) -> bool {
    if rest.len() >= 4 && rest[..4].iter().all(|l| is_variant_line(l)) {
        return true;
    }
    if rest.len() >= 3 && rest[..3].iter().all(|l| is_variant_line(l)) {
        let mut i = 3;
        while i < rest.len() && is_blank(rest[i]) {
            i += 1;
        }
        return i > 3 && i < rest.len() && is_variant_line(rest[i]);
    }
    false
}

fn join_continuation(existing: &str, addition: &str) -> String {
    if existing.is_empty() {
        addition.to_string()
    } else {
        format!("{}、{}", existing, addition)
    }
}

fn merge_stray_line(items: &mut [ParsedItem], prev: PrevLine, line: &str) -> PrevLine {
    match prev {
        PrevLine::Heading => {
            if let Some(item) = items.last_mut() {
                let joined = join_continuation(&item.head, line);
                item.head = joined;
                return PrevLine::Heading;
            }
        }
        PrevLine::Variant => {
            if let Some(variant) = items.last_mut().and_then(|i| i.variants.last_mut()) {
                let joined = join_continuation(variant, line);
                *variant = joined;
                return PrevLine::Variant;
            }
        }
        PrevLine::None => {}
    }
    warn!("Dropping unattached dialect line: {}", line);
    PrevLine::None
}

/// Parse dialect-format text into items.
///
/// Items that end up with neither a head nor variants are discarded, so an
/// empty head alone never produces a record.
pub fn parse_dialect(text: &str) -> Vec<ParsedItem> {
    let lines: Vec<&str> = text.lines().collect();
    let mut items: Vec<ParsedItem> = Vec::new();
    let mut prev = PrevLine::None;

    for (i, &line) in lines.iter().enumerate() {
        if is_blank(line) {
            continue;
        }
        if is_heading_line(line) {
            items.push(ParsedItem::new(strip_heading_prefix(line)));
            prev = PrevLine::Heading;
            continue;
        }
        if is_variant_line(line) {
            match items.last_mut() {
                Some(item) => {
                    item.variants.push(line[2..].to_string());
                    prev = PrevLine::Variant;
                }
                None => prev = PrevLine::None,
            }
            continue;
        }
        if looks_like_unmarked_heading(&lines[i + 1..]) {
            debug!("Recovering unmarked heading: {}", line);
            items.push(ParsedItem::new(line));
            prev = PrevLine::Heading;
            continue;
        }
        prev = merge_stray_line(&mut items, prev, line);
    }

    items.retain(|item| !item.is_empty());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_with_variants() {
        let items = parse_dialect("<今日は良い天気です。\n>>今日は晴れです。\n>>天気がいいです。\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "今日は良い天気です。");
        assert_eq!(items[0].variants, vec!["今日は晴れです。", "天気がいいです。"]);
    }

    #[test]
    fn test_fullwidth_heading_marker() {
        let items = parse_dialect("＜見出し\n>>変種");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "見出し");
    }

    #[test]
    fn test_ruby_tags_are_not_headings() {
        assert!(is_heading_line("<見出し"));
        assert!(is_heading_line("＜見出し"));
        assert!(!is_heading_line("<ruby>漢<rt>かん</rt></ruby>"));
        assert!(!is_heading_line("</ruby>"));
        assert!(!is_heading_line("<rt>かん</rt>"));
        assert!(!is_heading_line("ただの行"));
    }

    #[test]
    fn test_multiple_items() {
        let items = parse_dialect("<一つ目\n>>甲\n<二つ目\n>>乙\n>>丙");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].head, "一つ目");
        assert_eq!(items[0].variants, vec!["甲"]);
        assert_eq!(items[1].head, "二つ目");
        assert_eq!(items[1].variants, vec!["乙", "丙"]);
    }

    #[test]
    fn test_recovery_four_consecutive_variants() {
        let items = parse_dialect("今日は良い天気です。\n>>a\n>>b\n>>c\n>>d");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "今日は良い天気です。");
        assert_eq!(items[0].variants, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_recovery_three_variants_then_blank_then_fourth() {
        let items = parse_dialect("見出し行\n>>a\n>>b\n>>c\n\n>>d");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "見出し行");
        assert_eq!(items[0].variants, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_recovery_with_only_three_variants() {
        let items = parse_dialect("ただの行\n>>a\n>>b\n>>c");
        assert!(items.is_empty());
    }

    #[test]
    fn test_continuation_into_heading() {
        let items = parse_dialect("<見出し\nつづき");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "見出し、つづき");
    }

    #[test]
    fn test_continuation_into_variant() {
        let items = parse_dialect("<見出し\n>>変種\nつづき");
        assert_eq!(items[0].variants, vec!["変種、つづき"]);
    }

    #[test]
    fn test_blank_line_does_not_break_continuation() {
        let items = parse_dialect("<見出し\n\nつづき");
        assert_eq!(items[0].head, "見出し、つづき");
    }

    #[test]
    fn test_variant_before_any_heading_is_dropped() {
        let items = parse_dialect(">>はぐれ\n<見出し\n>>変種");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "見出し");
        assert_eq!(items[0].variants, vec!["変種"]);
    }

    #[test]
    fn test_stray_line_with_nothing_before_is_dropped() {
        let items = parse_dialect("はぐれ行\n<見出し");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "見出し");
    }

    #[test]
    fn test_empty_items_are_filtered() {
        assert!(parse_dialect("<\n").is_empty());

        let items = parse_dialect("<\n>>変種");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].head, "");
        assert_eq!(items[0].variants, vec!["変種"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_dialect("").is_empty());
        assert!(parse_dialect("\n\n\n").is_empty());
    }
}
