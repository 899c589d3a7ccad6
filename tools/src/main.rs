mod chart_cmd;
mod ids_cmd;
mod pinyin_cmd;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use libpinyin::PinyinConfig;

#[derive(Parser)]
#[command(name = "hanzi")]
#[command(about = "Inspect IDS character descriptions and pinyin syllables")]
#[command(version)]
struct Cli {
    /// TOML configuration file (normalize_input, strict_ids, chart, tone_style)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ideographic Description Sequences
    #[command(subcommand)]
    Ids(ids_cmd::IdsCommand),
    /// Tone conversion and syllable splitting
    #[command(subcommand)]
    Pinyin(pinyin_cmd::PinyinCommand),
    /// Inspect and check pinyin charts
    #[command(subcommand)]
    Chart(chart_cmd::ChartCommand),
}

fn load_config(path: Option<&Path>) -> Result<PinyinConfig> {
    match path {
        Some(path) => PinyinConfig::load_toml(path)
            .map_err(|e| anyhow!("failed to load config {}: {}", path.display(), e)),
        None => Ok(PinyinConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Ids(cmd) => ids_cmd::run(cmd, config.base()),
        Commands::Pinyin(cmd) => pinyin_cmd::run(cmd, &config),
        Commands::Chart(cmd) => chart_cmd::run(cmd, &config),
    }
}
