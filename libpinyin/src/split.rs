//! Chart-driven segmentation of a syllable into initial and final.
//!
//! Initials are tried longest surface first; when the remainder after an
//! initial matches no final the next (shorter) initial is tried, so `zhi`
//! still splits as `z` + `hi` under a chart that has no `i` final.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::chart::PinyinChart;
use crate::tone::parse_pinyin_tone;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Could not split pinyin {toneless}")]
    Unsplittable { toneless: String },
}

/// Result of [`try_split_pinyin`]: chart labels plus the tone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinyinSplit {
    pub initial: String,
    #[serde(rename = "final")]
    pub final_: String,
    pub tone: u8,
}

impl From<PinyinSplit> for (String, String, u8) {
    fn from(split: PinyinSplit) -> Self {
        (split.initial, split.final_, split.tone)
    }
}

/// A chart's productions flattened to `(label, surface)` pairs and sorted
/// by surface length, longest first. Ties keep chart order.
#[derive(Debug, Clone)]
pub struct ExpandedChart {
    initials: Vec<(String, String)>,
    finals: Vec<(String, String)>,
    overrides: BTreeMap<String, (String, String)>,
}

impl PinyinChart {
    /// Precompute the sorted expansion used by the segmenter.
    pub fn expanded(&self) -> ExpandedChart {
        ExpandedChart {
            initials: longest_first(self.initial_pairs()),
            finals: longest_first(self.final_pairs()),
            overrides: self.overrides.clone(),
        }
    }
}

fn longest_first<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = pairs
        .map(|(label, surface)| (label.to_string(), surface.to_string()))
        .collect();
    // sort_by_key is stable
    out.sort_by_key(|(_, surface)| Reverse(surface.chars().count()));
    out
}

impl ExpandedChart {
    /// Split a toneless syllable; `None` when no initial/final pair spells it.
    pub fn split(&self, toneless: &str) -> Option<(String, String)> {
        if let Some(hit) = self.overrides.get(toneless) {
            trace!(toneless, initial = %hit.0, final_ = %hit.1, "chart override");
            return Some(hit.clone());
        }

        for (initial_label, initial) in &self.initials {
            let Some(rest) = toneless.strip_prefix(initial.as_str()) else {
                continue;
            };
            match self.finals.iter().find(|(_, surface)| surface == rest) {
                Some((final_label, _)) => {
                    return Some((initial_label.clone(), final_label.clone()));
                }
                None => debug!(toneless, initial = %initial, rest, "no final, backtracking"),
            }
        }
        None
    }

    pub fn initials(&self) -> &[(String, String)] {
        &self.initials
    }

    pub fn finals(&self) -> &[(String, String)] {
        &self.finals
    }
}

/// Split a toneless syllable into `(initial_label, final_label)` under `chart`.
///
/// Expands the chart on every call; hold on to [`PinyinChart::expanded`]
/// (or use a bundled [`crate::ChartVariant`]) when splitting many syllables.
///
/// ```
/// use libpinyin::{split_toneless_pinyin, ChartVariant};
///
/// let chart = ChartVariant::Standard.chart();
/// assert_eq!(
///     split_toneless_pinyin("hao", chart),
///     Some(("h".to_string(), "ao".to_string()))
/// );
/// assert_eq!(split_toneless_pinyin("xyz", chart), None);
/// ```
pub fn split_toneless_pinyin(toneless: &str, chart: &PinyinChart) -> Option<(String, String)> {
    chart.expanded().split(toneless)
}

/// Decode the tone of `pinyin`, then split the toneless syllable.
pub fn try_split_pinyin(pinyin: &str, chart: &PinyinChart) -> Result<PinyinSplit, SplitError> {
    split_with(pinyin, |toneless| split_toneless_pinyin(toneless, chart))
}

pub(crate) fn split_with(
    pinyin: &str,
    split: impl FnOnce(&str) -> Option<(String, String)>,
) -> Result<PinyinSplit, SplitError> {
    let (toneless, tone) = parse_pinyin_tone(pinyin);
    match split(&toneless) {
        Some((initial, final_)) => Ok(PinyinSplit { initial, final_, tone }),
        None => Err(SplitError::Unsplittable { toneless }),
    }
}

/// Like [`try_split_pinyin`] but for syllables the chart must cover.
///
/// # Panics
///
/// Panics with `Could not split pinyin <toneless>` when the chart has no
/// split for the syllable; that means the chart data is inconsistent.
pub fn split_pinyin(pinyin: &str, chart: &PinyinChart) -> (String, String, u8) {
    match try_split_pinyin(pinyin, chart) {
        Ok(split) => split.into(),
        Err(err) => panic!("{}", err),
    }
}
