//! Japanese character classification
//!
//! Unicode range checks for the three Japanese scripts, plus the fixed
//! allow-list of early-grade kanji that annotation skips.

/// CJK Unified Ideographs (U+4E00..U+9FFF)
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

/// Hiragana block (U+3040..U+309F)
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309f}')
}

/// Katakana block (U+30A0..U+30FF)
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30a0}'..='\u{30ff}')
}

/// Any Japanese-script character
pub fn is_japanese_char(c: char) -> bool {
    is_kanji(c) || is_hiragana(c) || is_katakana(c)
}

/// Count Japanese-script characters, ignoring Latin text, digits,
/// punctuation and markup remnants.
pub fn count_japanese_chars(text: &str) -> usize {
    text.chars().filter(|&c| is_japanese_char(c)).count()
}

/// Kanji from the first two school grades. Runs consisting of these are
/// assumed readable and left unannotated.
const COMMON_KANJI: &str = "一右雨円王音下火花貝学気九休玉金空月犬見五口校左三山子四糸字耳七車手十出女小上森人水正生青夕石赤千川先早草足村大男竹中虫町天田土二日入年白八百文木本名目立力林六引羽雲園遠何科夏家歌画回会海絵外角楽活間丸岩顔汽記帰弓牛魚京強教近兄形計元言原戸古午後語工公広交光考行高黄合谷国黒今才細作算止市矢姉思紙寺自時室社弱首秋週春書少場色食心新親図数西声星晴切雪船線前組走多太体台地池知茶昼長鳥朝直通弟店点電刀冬当東答頭同道読内南肉馬売買麦半番父風分聞米歩母方北毎妹万明鳴毛門夜野友用曜来里理話";

/// Whether `c` is in the common-kanji allow-list.
pub fn is_common_kanji(c: char) -> bool {
    COMMON_KANJI.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_range() {
        assert!(is_kanji('漢'));
        assert!(is_kanji('一'));
        assert!(!is_kanji('あ'));
        assert!(!is_kanji('ア'));
        assert!(!is_kanji('a'));
        assert!(!is_kanji('。'));
    }

    #[test]
    fn test_kana_ranges() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ん'));
        assert!(!is_hiragana('ア'));

        assert!(is_katakana('ア'));
        assert!(is_katakana('ヶ'));
        assert!(!is_katakana('あ'));
    }

    #[test]
    fn test_count_excludes_non_japanese() {
        assert_eq!(count_japanese_chars("abc漢字123"), 2);
    }

    #[test]
    fn test_count_mixed_scripts() {
        assert_eq!(count_japanese_chars("今日はカフェ"), 6);
        assert_eq!(count_japanese_chars("<rt>かんじ</rt>"), 3);
        assert_eq!(count_japanese_chars(""), 0);
        assert_eq!(count_japanese_chars("hello, world!"), 0);
    }

    #[test]
    fn test_common_kanji_allow_list() {
        assert!(is_common_kanji('日'));
        assert!(is_common_kanji('本'));
        assert!(is_common_kanji('字'));
        assert!(!is_common_kanji('薔'));
        assert!(!is_common_kanji('饅'));
        assert!(!is_common_kanji('あ'));
    }
}
