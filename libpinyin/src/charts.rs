//! Bundled chart conventions.
//!
//! - `Standard`: textbook initials, `y`/`w` spellings folded into finals
//! - `Mm`: Mandarin Mastery style, medials fused into the initial
//! - `Hh`: Hanzi Hacker style, `_` for the empty final
//! - `Hmm`: Hacking Mandarin Mastery, 55 initials by 13 finals
//!
//! Each chart is parsed from its JSON asset on first use and lives for the
//! rest of the process.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chart::PinyinChart;
use crate::split::{split_with, ExpandedChart, PinyinSplit, SplitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    #[default]
    Standard,
    Mm,
    Hh,
    Hmm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart {0:?} (expected standard, mm, hh or hmm)")]
pub struct UnknownChartVariant(pub String);

fn parse_bundled(name: &str, json: &str) -> PinyinChart {
    match PinyinChart::from_json_str(json) {
        Ok(chart) => {
            debug!(chart = name, "parsed bundled pinyin chart");
            chart
        }
        Err(err) => panic!("bundled {} chart is malformed: {}", name, err),
    }
}

static STANDARD: Lazy<PinyinChart> =
    Lazy::new(|| parse_bundled("standard", include_str!("../data/standard_chart.json")));
static MM: Lazy<PinyinChart> =
    Lazy::new(|| parse_bundled("mm", include_str!("../data/mm_chart.json")));
static HH: Lazy<PinyinChart> =
    Lazy::new(|| parse_bundled("hh", include_str!("../data/hh_chart.json")));
static HMM: Lazy<PinyinChart> =
    Lazy::new(|| parse_bundled("hmm", include_str!("../data/hmm_chart.json")));

static STANDARD_EXPANDED: Lazy<ExpandedChart> = Lazy::new(|| STANDARD.expanded());
static MM_EXPANDED: Lazy<ExpandedChart> = Lazy::new(|| MM.expanded());
static HH_EXPANDED: Lazy<ExpandedChart> = Lazy::new(|| HH.expanded());
static HMM_EXPANDED: Lazy<ExpandedChart> = Lazy::new(|| HMM.expanded());

impl ChartVariant {
    pub const ALL: [ChartVariant; 4] = [
        ChartVariant::Standard,
        ChartVariant::Mm,
        ChartVariant::Hh,
        ChartVariant::Hmm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartVariant::Standard => "standard",
            ChartVariant::Mm => "mm",
            ChartVariant::Hh => "hh",
            ChartVariant::Hmm => "hmm",
        }
    }

    pub fn chart(self) -> &'static PinyinChart {
        match self {
            ChartVariant::Standard => &STANDARD,
            ChartVariant::Mm => &MM,
            ChartVariant::Hh => &HH,
            ChartVariant::Hmm => &HMM,
        }
    }

    /// Cached sorted expansion of [`ChartVariant::chart`].
    pub fn expanded(self) -> &'static ExpandedChart {
        match self {
            ChartVariant::Standard => &STANDARD_EXPANDED,
            ChartVariant::Mm => &MM_EXPANDED,
            ChartVariant::Hh => &HH_EXPANDED,
            ChartVariant::Hmm => &HMM_EXPANDED,
        }
    }

    pub fn split_toneless(self, toneless: &str) -> Option<(String, String)> {
        self.expanded().split(toneless)
    }

    pub fn try_split(self, pinyin: &str) -> Result<PinyinSplit, SplitError> {
        split_with(pinyin, |toneless| self.split_toneless(toneless))
    }
}

impl fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartVariant {
    type Err = UnknownChartVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChartVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_toneless_pinyin;

    #[test]
    fn names_round_trip() {
        for v in ChartVariant::ALL {
            assert_eq!(v.name().parse::<ChartVariant>(), Ok(v));
        }
        assert_eq!("HMM".parse::<ChartVariant>(), Ok(ChartVariant::Hmm));
        assert!("pinyin".parse::<ChartVariant>().is_err());
    }

    #[test]
    fn bundled_charts_load_and_validate() {
        for v in ChartVariant::ALL {
            v.chart().validate().unwrap_or_else(|e| panic!("{}: {}", v, e));
        }
    }

    #[test]
    fn cached_expansion_agrees_with_direct_split() {
        for v in ChartVariant::ALL {
            for s in ["hao", "zhi", "ju", "wa", "er", "xiong", "lüe", "ê"] {
                assert_eq!(v.split_toneless(s), split_toneless_pinyin(s, v.chart()), "{} {}", v, s);
            }
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ChartVariant::Hmm).unwrap(), r#""hmm""#);
        let v: ChartVariant = serde_json::from_str(r#""mm""#).unwrap();
        assert_eq!(v, ChartVariant::Mm);
    }
}
