// Tone codec vectors and round-trip properties over the reference syllables.

use libpinyin::{
    convert_pinyin_with_tone_number_to_tone_mark, is_pinyin_vowel, parse_pinyin_tone,
    split_pinyin, try_split_pinyin, ChartVariant, PinyinSplit, SplitError, PINYIN_SYLLABLES,
};
use proptest::prelude::*;

#[test]
fn tone_number_to_mark_vectors() {
    let cases = [
        ("a", "a"),
        ("a1", "ā"),
        ("a2", "á"),
        ("a3", "ǎ"),
        ("a4", "à"),
        ("a5", "a"),
        ("e1", "ē"),
        ("e4", "è"),
        ("bi", "bi"),
        ("bi1", "bī"),
        ("bi3", "bǐ"),
        ("bi5", "bi"),
        ("o2", "ó"),
        ("u3", "ǔ"),
        ("ü", "ü"),
        ("ü1", "ǖ"),
        ("ü2", "ǘ"),
        ("ü3", "ǚ"),
        ("ü4", "ǜ"),
        ("ü5", "ü"),
        ("v", "ü"),
        ("v1", "ǖ"),
        ("v4", "ǜ"),
        ("dou", "dou"),
        ("dou1", "dōu"),
        ("dou2", "dóu"),
        ("dou3", "dǒu"),
        ("dou4", "dòu"),
        ("dou5", "dou"),
        ("hao3", "hǎo"),
        ("zhu5", "zhu"),
        ("zi5", "zi"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert_pinyin_with_tone_number_to_tone_mark(input), expected, "{}", input);
    }
}

#[test]
fn tone_mark_to_number_vectors() {
    let cases = [
        ("niú", "niu", 2),
        ("hǎo", "hao", 3),
        ("ǖ", "ü", 1),
        ("ǘ", "ü", 2),
        ("ǚ", "ü", 3),
        ("ǜ", "ü", 4),
        ("ü", "ü", 5),
    ];
    for (input, toneless, tone) in cases {
        assert_eq!(parse_pinyin_tone(input), (toneless.to_string(), tone), "{}", input);
    }
}

#[test]
fn split_marked_syllables() {
    let standard = ChartVariant::Standard.chart();
    assert_eq!(
        split_pinyin("hǎo", standard),
        ("h".to_string(), "ao".to_string(), 3)
    );
    assert_eq!(
        split_pinyin("jù", standard),
        ("j".to_string(), "ü".to_string(), 4)
    );
    assert_eq!(
        ChartVariant::Mm.try_split("zhōng"),
        Ok(PinyinSplit {
            initial: "zhu".to_string(),
            final_: "(e)ng".to_string(),
            tone: 1,
        })
    );
    assert_eq!(
        try_split_pinyin("qwērty", standard),
        Err(SplitError::Unsplittable { toneless: "qwerty".to_string() })
    );
}

fn markable(syllable: &str) -> bool {
    syllable.chars().any(is_pinyin_vowel)
}

proptest! {
    #[test]
    fn numbered_syllables_decode_back(
        syllable in prop::sample::select(PINYIN_SYLLABLES),
        tone in 1u8..=5,
    ) {
        prop_assume!(markable(syllable));
        let marked = convert_pinyin_with_tone_number_to_tone_mark(&format!("{}{}", syllable, tone));
        prop_assert_eq!(parse_pinyin_tone(&marked), (syllable.to_string(), tone));
    }

    #[test]
    fn every_variant_splits_marked_syllables(
        syllable in prop::sample::select(PINYIN_SYLLABLES),
        tone in 1u8..=4,
        variant in prop::sample::select(ChartVariant::ALL.to_vec()),
    ) {
        let marked = convert_pinyin_with_tone_number_to_tone_mark(&format!("{}{}", syllable, tone));
        let split = variant.try_split(&marked);
        prop_assert!(split.is_ok(), "{} under {}", marked, variant);
    }

    #[test]
    fn unmarked_input_is_neutral(s in "[bcdfghjklmnpqrstwxyz]{0,6}") {
        prop_assert_eq!(parse_pinyin_tone(&s), (s.clone(), 5));
    }
}
