use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use libpinyin::{ChartError, ChartVariant, PinyinChart, PinyinConfig, PINYIN_SYLLABLES};

#[derive(Subcommand)]
pub enum ChartCommand {
    /// Check surface uniqueness and coverage of the reference syllables
    Check {
        /// Bundled chart to check (defaults to the configured chart)
        #[arg(long, conflicts_with = "file")]
        chart: Option<ChartVariant>,
        /// Check a chart JSON file instead of a bundled chart
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print a chart's initial groups, finals and overrides
    Show {
        #[arg(long)]
        chart: Option<ChartVariant>,
    },
}

pub fn run(cmd: ChartCommand, config: &PinyinConfig) -> Result<()> {
    match cmd {
        ChartCommand::Check { chart, file } => {
            let name;
            let loaded;
            let chart: &PinyinChart = match file {
                Some(path) => {
                    loaded = PinyinChart::from_json_path(&path)
                        .with_context(|| format!("failed to load chart {}", path.display()))?;
                    name = path.display().to_string();
                    &loaded
                }
                None => {
                    let variant = chart.unwrap_or(config.chart);
                    name = variant.to_string();
                    variant.chart()
                }
            };
            let report = check(chart);
            for line in report.lines(&name) {
                println!("{}", line);
            }
            if !report.is_ok() {
                bail!("chart {} failed its checks", name);
            }
        }
        ChartCommand::Show { chart } => {
            let variant = chart.unwrap_or(config.chart);
            for line in show(variant.chart()) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

struct CheckReport {
    validation: Result<(), ChartError>,
    unsplittable: Vec<&'static str>,
    overrides: usize,
}

impl CheckReport {
    fn is_ok(&self) -> bool {
        self.validation.is_ok() && self.unsplittable.is_empty()
    }

    fn lines(&self, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        match &self.validation {
            Ok(()) => out.push(format!("{}: surfaces are unique", name)),
            Err(e) => out.push(format!("{}: {}", name, e)),
        }
        if self.unsplittable.is_empty() {
            out.push(format!(
                "{}: all {} syllables split ({} overrides)",
                name,
                PINYIN_SYLLABLES.len(),
                self.overrides
            ));
        } else {
            out.push(format!(
                "{}: {} syllables could not be split: {}",
                name,
                self.unsplittable.len(),
                self.unsplittable.join(" ")
            ));
        }
        out
    }
}

fn check(chart: &PinyinChart) -> CheckReport {
    let expanded = chart.expanded();
    CheckReport {
        validation: chart.validate(),
        unsplittable: PINYIN_SYLLABLES
            .iter()
            .copied()
            .filter(|s| expanded.split(s).is_none())
            .collect(),
        overrides: chart.overrides.len(),
    }
}

fn production(label: &str, surfaces: &[String]) -> String {
    if surfaces.len() == 1 && surfaces[0] == label {
        label.to_string()
    } else {
        let shown: Vec<String> = surfaces
            .iter()
            .map(|s| if s.is_empty() { "\"\"".to_string() } else { s.clone() })
            .collect();
        format!("{}={}", label, shown.join("|"))
    }
}

fn show(chart: &PinyinChart) -> Vec<String> {
    let mut out = Vec::new();
    for group in &chart.initials {
        let items: Vec<String> = group
            .initials
            .iter()
            .map(|p| production(&p.label, &p.surfaces))
            .collect();
        out.push(format!("{:?} ({}): {}", group.id, group.desc, items.join(" ")));
    }
    let finals: Vec<String> = chart
        .finals
        .iter()
        .map(|p| production(&p.label, &p.surfaces))
        .collect();
    out.push(format!("finals: {}", finals.join(" ")));
    for (syllable, (initial, final_)) in &chart.overrides {
        out.push(format!("override {} = {} + {}", syllable, initial, final_));
    }
    out
}
