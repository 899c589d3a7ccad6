//! libhanzi-core
//!
//! Configuration and text utilities shared by the language-data crates
//! (libids, libpinyin).
//!
//! Public API:
//! - `Config` - Generic options loaded from / saved to TOML
//! - `utils` - Input normalisation and code point helpers
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Generic configuration shared by the language-data crates.
///
/// Language-specific options (chart selection, tone rendering, etc.) belong
/// in `PinyinConfig` in libpinyin, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// NFC-normalize and trim user supplied text before processing.
    /// Combining tone marks typed as `a` + U+0301 become `á` this way.
    pub normalize_input: bool,

    /// Require IDS input to be exactly one node with no trailing scalars.
    pub strict_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_input: true,
            strict_ids: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply `normalize_input` to a piece of user input.
    pub fn prepare_input(&self, s: &str) -> String {
        if self.normalize_input {
            utils::normalize(s)
        } else {
            s.to_string()
        }
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Unicode short identifier for a scalar, e.g. `U+2FF0` for `⿰`.
    pub fn code_point_label(ch: char) -> String {
        format!("U+{:04X}", ch as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_normalizes_but_is_lenient() {
        let cfg = Config::default();
        assert!(cfg.normalize_input);
        assert!(!cfg.strict_ids);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            normalize_input: false,
            strict_ids: true,
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_toml_str("strict_ids = true\n").unwrap();
        assert!(cfg.normalize_input);
        assert!(cfg.strict_ids);
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "libhanzi_core_config_{}.toml",
            std::process::id()
        ));
        let cfg = Config {
            normalize_input: false,
            strict_ids: false,
        };
        cfg.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn normalize_composes_combining_marks() {
        // "ha" + COMBINING CARON + "o" -> "hǎo"
        assert_eq!(utils::normalize(" ha\u{030C}o "), "hǎo");
    }

    #[test]
    fn prepare_input_respects_flag() {
        let mut cfg = Config::default();
        assert_eq!(cfg.prepare_input(" ni "), "ni");
        cfg.normalize_input = false;
        assert_eq!(cfg.prepare_input(" ni "), " ni ");
    }

    #[test]
    fn code_point_labels() {
        assert_eq!(utils::code_point_label('⿰'), "U+2FF0");
        assert_eq!(utils::code_point_label('a'), "U+0061");
        assert_eq!(utils::code_point_label('𠂇'), "U+20087");
    }
}
