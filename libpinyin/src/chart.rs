/*!
Pinyin chart model.

A chart is a teaching convention for cutting a toneless syllable into an
initial and a final. It lists initial productions (grouped by the medial
they absorb), final productions, and whole-syllable overrides for spellings
the longest-prefix rule would get wrong.

A production is a display label plus the surface spellings it covers. In
JSON a bare string `"b"` is shorthand for `["b", "b"]`:

```json
{
  "initials": [{ "id": "Basic", "desc": "Consonants", "initials": ["b", ["∅", ""]] }],
  "finals": ["a", ["i", "i", "yi"]],
  "overrides": { "ju": ["j", "ü"] }
}
```
*/

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or checking a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart file could not be read.
    #[error("failed to read chart {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The chart is not valid chart JSON.
    #[error("invalid chart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two initial productions share a surface spelling.
    #[error("initial surface {surface:?} is produced by both {first:?} and {second:?}")]
    DuplicateInitial {
        surface: String,
        first: String,
        second: String,
    },

    /// Two final productions share a surface spelling.
    #[error("final surface {surface:?} is produced by both {first:?} and {second:?}")]
    DuplicateFinal {
        surface: String,
        first: String,
        second: String,
    },

    /// A production names a label but no surface spelling.
    #[error("production {label:?} has no surface forms")]
    EmptyProduction { label: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;

/// Which medial, if any, the initials of a group have absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinyinInitialGroupId {
    Basic,
    I,
    U,
    V,
    Null,
    Everything,
}

/// A display label and the surface spellings it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductionRepr", into = "ProductionRepr")]
pub struct PinyinProduction {
    pub label: String,
    pub surfaces: Vec<String>,
}

impl PinyinProduction {
    pub fn new(label: impl Into<String>, surfaces: &[&str]) -> Self {
        Self {
            label: label.into(),
            surfaces: surfaces.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A production whose only surface is its own label.
    pub fn bare(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            surfaces: vec![label.clone()],
            label,
        }
    }

    /// `(label, surface)` for every surface.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.surfaces
            .iter()
            .map(move |surface| (self.label.as_str(), surface.as_str()))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ProductionRepr {
    Bare(String),
    Full(Vec<String>),
}

impl TryFrom<ProductionRepr> for PinyinProduction {
    type Error = String;

    fn try_from(repr: ProductionRepr) -> std::result::Result<Self, String> {
        match repr {
            ProductionRepr::Bare(label) => Ok(PinyinProduction::bare(label)),
            ProductionRepr::Full(mut parts) => {
                if parts.is_empty() {
                    return Err("production must start with a label".to_string());
                }
                let label = parts.remove(0);
                Ok(PinyinProduction {
                    label,
                    surfaces: parts,
                })
            }
        }
    }
}

impl From<PinyinProduction> for ProductionRepr {
    fn from(p: PinyinProduction) -> Self {
        if p.surfaces.len() == 1 && p.surfaces[0] == p.label {
            ProductionRepr::Bare(p.label)
        } else {
            let mut parts = Vec::with_capacity(p.surfaces.len() + 1);
            parts.push(p.label);
            parts.extend(p.surfaces);
            ProductionRepr::Full(parts)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinyinInitialGroup {
    pub id: PinyinInitialGroupId,
    pub desc: String,
    pub initials: Vec<PinyinProduction>,
}

/// Initials, finals and whole-syllable overrides of one convention.
///
/// Within a chart no two initial surfaces may coincide, and likewise for
/// finals; [`PinyinChart::validate`] checks this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinyinChart {
    pub initials: Vec<PinyinInitialGroup>,
    pub finals: Vec<PinyinProduction>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, (String, String)>,
}

impl PinyinChart {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading pinyin chart");
        let json = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// `(label, surface)` pairs of all initial groups, in chart order.
    pub fn initial_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.initials
            .iter()
            .flat_map(|group| group.initials.iter())
            .flat_map(PinyinProduction::pairs)
    }

    /// `(label, surface)` pairs of all finals, in chart order.
    pub fn final_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.finals.iter().flat_map(PinyinProduction::pairs)
    }

    /// Check that every production has a surface and that surfaces are
    /// unique among initials and among finals.
    pub fn validate(&self) -> Result<()> {
        let productions = self
            .initials
            .iter()
            .flat_map(|group| group.initials.iter())
            .chain(self.finals.iter());
        for production in productions {
            if production.surfaces.is_empty() {
                return Err(ChartError::EmptyProduction {
                    label: production.label.clone(),
                });
            }
        }

        if let Some((surface, first, second)) = first_duplicate(self.initial_pairs()) {
            return Err(ChartError::DuplicateInitial { surface, first, second });
        }
        if let Some((surface, first, second)) = first_duplicate(self.final_pairs()) {
            return Err(ChartError::DuplicateFinal { surface, first, second });
        }
        debug!(
            initials = self.initial_pairs().count(),
            finals = self.final_pairs().count(),
            overrides = self.overrides.len(),
            "pinyin chart is well formed"
        );
        Ok(())
    }
}

fn first_duplicate<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Option<(String, String, String)> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (label, surface) in pairs {
        if let Some(first) = seen.insert(surface, label) {
            return Some((surface.to_string(), first.to_string(), label.to_string()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "initials": [
            { "id": "Basic", "desc": "consonants", "initials": ["b", "zh"] },
            { "id": "Null", "desc": "none", "initials": [["∅", ""]] }
        ],
        "finals": ["a", ["i", "i", "yi"]],
        "overrides": { "zhi": ["zh", "∅"] }
    }"#;

    #[test]
    fn parses_bare_and_array_productions() {
        let chart = PinyinChart::from_json_str(SMALL).unwrap();
        assert_eq!(chart.initials[0].id, PinyinInitialGroupId::Basic);
        assert_eq!(chart.initials[0].initials[0], PinyinProduction::bare("b"));
        assert_eq!(chart.initials[1].initials[0], PinyinProduction::new("∅", &[""]));
        assert_eq!(chart.finals[1], PinyinProduction::new("i", &["i", "yi"]));
        assert_eq!(
            chart.overrides.get("zhi"),
            Some(&("zh".to_string(), "∅".to_string()))
        );
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn overrides_are_optional() {
        let chart = PinyinChart::from_json_str(
            r#"{ "initials": [], "finals": ["a"] }"#,
        )
        .unwrap();
        assert!(chart.overrides.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_shorthand() {
        let chart = PinyinChart::from_json_str(SMALL).unwrap();
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains(r#""initials":["b","zh"]"#));
        assert!(json.contains(r#"["∅",""]"#));
        assert_eq!(PinyinChart::from_json_str(&json).unwrap(), chart);
    }

    #[test]
    fn flattens_pairs_in_order() {
        let chart = PinyinChart::from_json_str(SMALL).unwrap();
        let initials: Vec<_> = chart.initial_pairs().collect();
        assert_eq!(initials, [("b", "b"), ("zh", "zh"), ("∅", "")]);
        let finals: Vec<_> = chart.final_pairs().collect();
        assert_eq!(finals, [("a", "a"), ("i", "i"), ("i", "yi")]);
    }

    #[test]
    fn rejects_empty_array_production() {
        let err = PinyinChart::from_json_str(r#"{ "initials": [], "finals": [[]] }"#);
        assert!(matches!(err, Err(ChartError::Json(_))));
    }

    #[test]
    fn reports_label_without_surfaces() {
        let chart = PinyinChart::from_json_str(r#"{ "initials": [], "finals": [["x"]] }"#).unwrap();
        assert!(matches!(
            chart.validate(),
            Err(ChartError::EmptyProduction { label }) if label == "x"
        ));
    }

    #[test]
    fn reports_duplicate_surfaces() {
        let chart = PinyinChart::from_json_str(
            r#"{ "initials": [
                    { "id": "Basic", "desc": "", "initials": ["y"] },
                    { "id": "I", "desc": "", "initials": [["yi", "y"]] }
                ], "finals": ["a"] }"#,
        )
        .unwrap();
        match chart.validate() {
            Err(ChartError::DuplicateInitial { surface, first, second }) => {
                assert_eq!((surface.as_str(), first.as_str(), second.as_str()), ("y", "y", "yi"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let chart =
            PinyinChart::from_json_str(r#"{ "initials": [], "finals": ["a", ["b", "a"]] }"#)
                .unwrap();
        assert!(matches!(chart.validate(), Err(ChartError::DuplicateFinal { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PinyinChart::from_json_path("/nonexistent/chart.json").unwrap_err();
        assert!(matches!(err, ChartError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/chart.json"));
    }
}
