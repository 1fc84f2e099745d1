//! Ruby annotation
//!
//! Wraps runs of uncommon kanji in `<ruby>` elements. Bracket readings
//! written after a run (`薔薇[ばら]`) move into the `<rt>` slot; runs with
//! no reading get an empty `<rt>` for the client to fill in.

use super::kanji::{is_common_kanji, is_kanji};
use super::scan::Scanner;
use super::strip::reading_annotation;

/// Convert bracket readings to ruby markup for every run of uncommon kanji.
///
/// Early-grade kanji and non-kanji text pass through untouched, including
/// any brackets that follow them.
pub fn add_furigana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut s = Scanner::new(text);

    while let Some(c) = s.peek() {
        if !is_kanji(c) || is_common_kanji(c) {
            out.push(c);
            s.advance();
            continue;
        }

        let mut run = String::new();
        while let Some(k) = s.peek() {
            if !is_kanji(k) || is_common_kanji(k) {
                break;
            }
            run.push(k);
            s.advance();
        }

        let reading = if s.peek() == Some('[') {
            match reading_annotation(s.remaining()) {
                Some((r, consumed)) => {
                    s.skip_bytes(consumed);
                    r
                }
                None => "",
            }
        } else {
            ""
        };

        out.push_str("<ruby>");
        out.push_str(&run);
        out.push_str("<rt>");
        out.push_str(reading);
        out.push_str("</rt></ruby>");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furigana::strip_furigana;

    #[test]
    fn test_annotates_bracket_reading() {
        assert_eq!(
            add_furigana("薔薇[ばら]が咲く"),
            "<ruby>薔薇<rt>ばら</rt></ruby>が<ruby>咲<rt></rt></ruby>く"
        );
    }

    #[test]
    fn test_discards_meaning_part() {
        assert_eq!(
            add_furigana("檸檬[れもん・lemon]"),
            "<ruby>檸檬<rt>れもん</rt></ruby>"
        );
    }

    #[test]
    fn test_empty_reading_placeholder() {
        assert_eq!(add_furigana("躊躇する"), "<ruby>躊躇<rt></rt></ruby>する");
    }

    #[test]
    fn test_common_kanji_pass_through() {
        assert_eq!(add_furigana("東京[とうきょう]"), "東京[とうきょう]");
        assert_eq!(add_furigana("日本の学校"), "日本の学校");
    }

    #[test]
    fn test_run_splits_at_common_kanji() {
        assert_eq!(
            add_furigana("大蛇[おろち]"),
            "大<ruby>蛇<rt>おろち</rt></ruby>"
        );
    }

    #[test]
    fn test_unterminated_bracket_left_in_place() {
        assert_eq!(
            add_furigana("薔薇[ばら"),
            "<ruby>薔薇<rt></rt></ruby>[ばら"
        );
    }

    #[test]
    fn test_non_kanji_text_untouched() {
        assert_eq!(add_furigana("hello world"), "hello world");
        assert_eq!(add_furigana("ひらがなとカタカナ"), "ひらがなとカタカナ");
        assert_eq!(add_furigana(""), "");
    }

    #[test]
    fn test_stripping_annotated_output_recovers_base() {
        assert_eq!(strip_furigana(&add_furigana("漢字[かんじ]")), "漢字");
        assert_eq!(strip_furigana(&add_furigana("薔薇[ばら]が咲く")), "薔薇が咲く");
    }
}
