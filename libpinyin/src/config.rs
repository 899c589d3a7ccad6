use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartVariant;
use crate::tone::convert_pinyin_with_tone_number_to_tone_mark;

/// Pinyin-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libhanzi_core::Config` (flattened via serde)
/// - The chart convention used for splitting
/// - How syllables are written back out (tone marks or tone numbers)
///
/// # Example
///
/// ```rust
/// use libpinyin::{ChartVariant, PinyinConfig};
///
/// let config = PinyinConfig::from_toml_str("chart = \"hmm\"\nstrict_ids = true").unwrap();
/// assert_eq!(config.chart, ChartVariant::Hmm);
/// assert!(config.base().strict_ids);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PinyinConfig {
    /// Base configuration fields (input normalisation, IDS strictness)
    #[serde(flatten)]
    pub base: libhanzi_core::Config,

    /// Chart used when splitting syllables
    pub chart: ChartVariant,

    pub tone_style: ToneStyle,
}

/// Written form of a syllable's tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    /// `hǎo`
    #[default]
    Mark,
    /// `hao3`
    Number,
}

impl ToneStyle {
    /// Write `toneless` with `tone` in this style. Tone 5 gets no digit.
    pub fn render(self, toneless: &str, tone: u8) -> String {
        match self {
            ToneStyle::Mark => {
                convert_pinyin_with_tone_number_to_tone_mark(&format!("{}{}", toneless, tone))
            }
            ToneStyle::Number if (1..=4).contains(&tone) => format!("{}{}", toneless, tone),
            ToneStyle::Number => toneless.to_string(),
        }
    }
}

impl PinyinConfig {
    /// Get a reference to the base config
    pub fn base(&self) -> &libhanzi_core::Config {
        &self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading pinyin config");
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
