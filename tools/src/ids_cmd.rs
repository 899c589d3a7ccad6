use anyhow::{Context, Result};
use clap::Subcommand;
use libhanzi_core::utils::code_point_label;
use libhanzi_core::Config;
use libids::{flatten_ids, parse_with_config, walk_ids_node, IdsLeaf, IdsNode};

#[derive(Subcommand)]
pub enum IdsCommand {
    /// Print the parsed tree
    Parse {
        ids: String,
        /// Fail when text follows the first complete node
        #[arg(long)]
        strict: bool,
        /// Print the tree as JSON instead of Rust debug output
        #[arg(long)]
        json: bool,
    },
    /// Print the leaf components in reading order, one per line
    Leaves { ids: String },
    /// Collapse chained ⿰/⿱ layouts into ⿲/⿳
    Flatten { ids: String },
}

pub fn run(cmd: IdsCommand, config: &Config) -> Result<()> {
    match cmd {
        IdsCommand::Parse { ids, strict, json } => {
            let node = parse(&ids, strict || config.strict_ids, config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&node)?);
            } else {
                println!("{:#?}", node);
            }
        }
        IdsCommand::Leaves { ids } => {
            let node = parse(&ids, config.strict_ids, config)?;
            for line in leaf_lines(&node) {
                println!("{}", line);
            }
        }
        IdsCommand::Flatten { ids } => {
            let node = parse(&ids, config.strict_ids, config)?;
            println!("{}", flatten_ids(node));
        }
    }
    Ok(())
}

fn parse(ids: &str, strict: bool, config: &Config) -> Result<IdsNode> {
    let config = Config {
        strict_ids: strict,
        ..config.clone()
    };
    parse_with_config(ids, &config).with_context(|| format!("failed to parse IDS {:?}", ids))
}

fn leaf_lines(node: &IdsNode) -> Vec<String> {
    walk_ids_node(node)
        .map(|leaf| match leaf {
            IdsLeaf::Character(c) => format!("{}\t{}", c, code_point_label(c)),
            IdsLeaf::UnknownCharacter(_) => {
                format!("{}\t{}", leaf, code_point_label(leaf.as_char()))
            }
        })
        .collect()
}
