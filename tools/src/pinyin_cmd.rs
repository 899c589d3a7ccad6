use anyhow::{bail, Result};
use clap::Subcommand;
use libpinyin::{
    convert_pinyin_with_tone_number_to_tone_mark, parse_pinyin_tone, ChartVariant, PinyinConfig,
    PinyinSplit,
};

#[derive(Subcommand)]
pub enum PinyinCommand {
    /// Tone numbers to tone marks: hao3 -> hǎo
    Mark {
        #[arg(required = true)]
        syllables: Vec<String>,
    },
    /// Tone marks to tone numbers: hǎo -> hao 3
    Tone {
        #[arg(required = true)]
        syllables: Vec<String>,
    },
    /// Split syllables into chart initial and final
    Split {
        #[arg(required = true)]
        syllables: Vec<String>,
        /// standard, mm, hh or hmm (defaults to the configured chart)
        #[arg(long)]
        chart: Option<ChartVariant>,
        /// Print one JSON object per syllable
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: PinyinCommand, config: &PinyinConfig) -> Result<()> {
    match cmd {
        PinyinCommand::Mark { syllables } => {
            for s in syllables {
                let input = config.base.prepare_input(&s);
                println!("{}", convert_pinyin_with_tone_number_to_tone_mark(&input));
            }
        }
        PinyinCommand::Tone { syllables } => {
            for s in syllables {
                let (toneless, tone) = parse_pinyin_tone(&config.base.prepare_input(&s));
                println!("{} {}", toneless, tone);
            }
        }
        PinyinCommand::Split { syllables, chart, json } => {
            let variant = chart.unwrap_or(config.chart);
            let mut failed = 0;
            for s in syllables {
                match split_one(&s, variant, config) {
                    Ok((_, split)) if json => println!("{}", serde_json::to_string(&split)?),
                    Ok((toneless, split)) => println!("{}", describe(&toneless, &split, config)),
                    Err(err) => {
                        eprintln!("{}: {}", s, err);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{} syllable(s) could not be split with the {} chart", failed, variant);
            }
        }
    }
    Ok(())
}

/// Accepts either `hǎo` or `hao3`. Returns the toneless spelling alongside
/// the split.
fn split_one(
    raw: &str,
    variant: ChartVariant,
    config: &PinyinConfig,
) -> Result<(String, PinyinSplit)> {
    let mut syllable = config.base.prepare_input(raw);
    if syllable.ends_with(|c: char| c.is_ascii_digit()) {
        syllable = convert_pinyin_with_tone_number_to_tone_mark(&syllable);
    }
    let split = variant.try_split(&syllable)?;
    let (toneless, _) = parse_pinyin_tone(&syllable);
    Ok((toneless, split))
}

fn describe(toneless: &str, split: &PinyinSplit, config: &PinyinConfig) -> String {
    format!(
        "{}\t{} + {}\ttone {}",
        config.tone_style.render(toneless, split.tone),
        split.initial,
        split.final_,
        split.tone
    )
}
