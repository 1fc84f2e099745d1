//! Furigana stripping
//!
//! Removes bracket (`漢字[かんじ]`) and ruby (`<ruby>漢字<rt>かんじ</rt></ruby>`)
//! annotations, leaving only the base text. Malformed markup is kept as
//! literal text; these functions never fail.

use super::kanji::is_kanji;
use super::scan::Scanner;

/// Strip all furigana annotations from `text`.
///
/// The ruby and bracket passes are re-run until the text stops changing,
/// so nested ruby and annotations uncovered by an earlier pass are removed
/// as well. The result is a fixed point: stripping twice equals stripping
/// once.
pub fn strip_furigana(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = strip_bracket_readings(&strip_ruby_tags(&current));
        if stripped == current {
            return stripped;
        }
        current = stripped;
    }
}

/// One pass over `input`, replacing each well-formed ruby element with its
/// base text. Stray or unterminated tags are copied through unchanged.
fn strip_ruby_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut s = Scanner::new(input);

    while let Some(c) = s.peek() {
        if c == '<' {
            if let Some((base, consumed)) = parse_ruby_element(s.remaining()) {
                out.push_str(&base);
                s.skip_bytes(consumed);
                continue;
            }
        }
        out.push(c);
        s.advance();
    }

    out
}

/// Attempt to consume one ruby element at the start of `input`.
///
/// Returns the base text (including `<rb>` contents, excluding readings)
/// and the byte length consumed. `None` when the element never closes.
fn parse_ruby_element(input: &str) -> Option<(String, usize)> {
    let mut s = Scanner::new(input);
    if !s.skip_str("<ruby>") {
        return None;
    }

    let mut base = String::new();
    loop {
        if s.skip_str("</ruby>") {
            return Some((base, s.pos()));
        }
        if s.skip_str("<rt>") {
            // discard the reading
            while !s.skip_str("</rt>") {
                s.advance()?;
            }
        } else if s.skip_str("<rb>") {
            while !s.skip_str("</rb>") {
                base.push(s.advance()?);
            }
        } else {
            base.push(s.advance()?);
        }
    }
}

/// One pass over `input`, dropping `[reading]` annotations that directly
/// follow a kanji run. Brackets after non-kanji text are unrelated content
/// and stay put.
fn strip_bracket_readings(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut s = Scanner::new(input);

    while let Some(c) = s.peek() {
        if is_kanji(c) {
            while let Some(k) = s.peek() {
                if !is_kanji(k) {
                    break;
                }
                out.push(k);
                s.advance();
            }
            if s.peek() == Some('[') {
                if let Some((_, consumed)) = reading_annotation(s.remaining()) {
                    s.skip_bytes(consumed);
                }
            }
        } else {
            out.push(c);
            s.advance();
        }
    }

    out
}

/// Parse a `[reading]` or `[reading・meaning]` annotation at the start of
/// `input`. Returns the reading (meaning discarded) and the byte length
/// consumed. `None` for unterminated brackets, nested `[`, or brackets
/// spanning a line break, which are all treated as literal text by callers.
pub(super) fn reading_annotation(input: &str) -> Option<(&str, usize)> {
    let mut s = Scanner::new(input);
    if !s.skip_if('[') {
        return None;
    }

    let start = s.pos();
    while let Some(c) = s.peek() {
        match c {
            ']' => {
                let content = &input[start..s.pos()];
                let reading = match content.find('・') {
                    Some(i) => &content[..i],
                    None => content,
                };
                s.advance();
                return Some((reading, s.pos()));
            }
            '[' | '\n' | '\r' => return None,
            _ => {
                s.advance();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bracket_form() {
        assert_eq!(strip_furigana("漢字[かんじ]です"), "漢字です");
        assert_eq!(strip_furigana("日本[にほん]の本[ほん]"), "日本の本");
    }

    #[test]
    fn test_strip_bracket_with_meaning() {
        assert_eq!(strip_furigana("檸檬[れもん・lemon]を買う"), "檸檬を買う");
    }

    #[test]
    fn test_unterminated_bracket_is_literal() {
        assert_eq!(strip_furigana("価格[100円"), "価格[100円");
    }

    #[test]
    fn test_bracket_after_non_kanji_is_literal() {
        assert_eq!(strip_furigana("abc[def]"), "abc[def]");
        assert_eq!(strip_furigana("カフェ[かふぇ]"), "カフェ[かふぇ]");
        assert_eq!(strip_furigana("です[よみ]"), "です[よみ]");
    }

    #[test]
    fn test_bracket_spanning_lines_is_literal() {
        assert_eq!(strip_furigana("漢[か\nん]"), "漢[か\nん]");
    }

    #[test]
    fn test_strip_ruby_form() {
        assert_eq!(
            strip_furigana("<ruby>漢字<rt>かんじ</rt></ruby>です"),
            "漢字です"
        );
    }

    #[test]
    fn test_strip_ruby_with_rb() {
        assert_eq!(
            strip_furigana("<ruby><rb>漢字</rb><rt>かんじ</rt></ruby>"),
            "漢字"
        );
    }

    #[test]
    fn test_strip_adjacent_ruby() {
        assert_eq!(
            strip_furigana("<ruby>日<rt>に</rt></ruby><ruby>本<rt>ほん</rt></ruby>語"),
            "日本語"
        );
    }

    #[test]
    fn test_strip_interleaved_ruby_pairs() {
        assert_eq!(
            strip_furigana("<ruby>漢<rt>かん</rt>字<rt>じ</rt></ruby>"),
            "漢字"
        );
    }

    #[test]
    fn test_strip_nested_ruby() {
        assert_eq!(
            strip_furigana("<ruby><ruby>漢<rt>かん</rt></ruby>字<rt>じ</rt></ruby>"),
            "漢字"
        );
    }

    #[test]
    fn test_malformed_ruby_is_literal() {
        assert_eq!(strip_furigana("<ruby>漢字"), "<ruby>漢字");
        assert_eq!(strip_furigana("<ruby>漢<rt>かん"), "<ruby>漢<rt>かん");
        assert_eq!(strip_furigana("<rt>かん</rt>"), "<rt>かん</rt>");
    }

    #[test]
    fn test_ruby_uncovering_bracket() {
        // removing the ruby element exposes a bracket annotation
        assert_eq!(strip_furigana("<ruby>漢<rt>かん</rt></ruby>[x]"), "漢");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "漢字[かんじ]です",
            "<ruby>漢字<rt>かんじ</rt></ruby>",
            "価格[100円",
            "<ruby>漢<rt>かん</rt></ruby>[x]",
            "plain text with no annotations",
            "",
        ];
        for input in inputs {
            let once = strip_furigana(input);
            assert_eq!(strip_furigana(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_reading_annotation_parsing() {
        assert_eq!(reading_annotation("[かんじ]rest"), Some(("かんじ", "[かんじ]".len())));
        assert_eq!(
            reading_annotation("[れもん・lemon]"),
            Some(("れもん", "[れもん・lemon]".len()))
        );
        assert_eq!(reading_annotation("[abc"), None);
        assert_eq!(reading_annotation("[a[b]]"), None);
        assert_eq!(reading_annotation("no bracket"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_furigana(""), "");
    }
}
