//! Furigana annotation handling
//!
//! Two wire forms are understood: bracket readings (`漢字[かんじ]`) and HTML
//! ruby elements (`<ruby>漢字<rt>かんじ</rt></ruby>`). Everything here is
//! pure string transformation with no allocation beyond the output.

mod annotate;
mod kanji;
mod scan;
mod strip;

pub use annotate::add_furigana;
pub use kanji::{count_japanese_chars, is_common_kanji, is_hiragana, is_japanese_char, is_kanji, is_katakana};
pub use strip::strip_furigana;
