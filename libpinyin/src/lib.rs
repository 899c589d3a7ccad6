//! libpinyin crate root
//!
//! Mandarin pinyin phonology: the tone codec, chart models for several
//! teaching conventions, and the segmenter that cuts a syllable into an
//! initial and a final according to a chart.
//!
//! Public API exported here:
//! - `parse_pinyin_tone` / `convert_pinyin_with_tone_number_to_tone_mark` from `tone`
//! - `PinyinChart` and its productions from `chart`
//! - `ChartVariant` (bundled charts) from `charts`
//! - `split_toneless_pinyin`, `split_pinyin`, `try_split_pinyin` from `split`
//! - `PINYIN_SYLLABLES` from `syllables`
//! - `PinyinConfig` from `config`

pub mod chart;
pub mod charts;
pub mod config;
pub mod split;
pub mod syllables;
pub mod tone;

// Convenience re-exports for common types used by callers.
pub use chart::{
    ChartError, PinyinChart, PinyinInitialGroup, PinyinInitialGroupId, PinyinProduction,
};
pub use charts::{ChartVariant, UnknownChartVariant};
pub use config::{PinyinConfig, ToneStyle};
pub use split::{
    split_pinyin, split_toneless_pinyin, try_split_pinyin, ExpandedChart, PinyinSplit,
    SplitError,
};
pub use syllables::{is_pinyin_syllable, PINYIN_SYLLABLES};
pub use tone::{
    convert_pinyin_with_tone_number_to_tone_mark, is_pinyin_vowel, parse_pinyin_tone, tone_mark,
};
