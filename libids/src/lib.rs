//! libids crate root
//!
//! Ideographic Description Sequences (IDS) describe how a CJK character is
//! spatially assembled from components, e.g. `⿰木目` is 相: 木 left of 目.
//!
//! Public API exported here:
//! - `IdsNode` / `IdsOperator` tree model from `node`
//! - `parse_ids`, `parse_ids_at`, `parse_ids_chars`, `parse_ids_strict` and `Cursor` from `parser`
//! - `ids_node_to_string` from `serialize` (also `Display` on `IdsNode`)
//! - `walk_ids_node` / `IdsLeaf` from `walk`
//! - `flatten_ids` from `flatten`

pub mod error;
pub mod flatten;
pub mod node;
pub mod parser;
pub mod serialize;
pub mod walk;

pub use error::IdsError;
pub use flatten::flatten_ids;
pub use node::{stroke_count_placeholder, stroke_count_to_char, IdsNode, IdsOperator};
pub use parser::{parse_ids, parse_ids_at, parse_ids_chars, parse_ids_strict, Cursor};
pub use serialize::ids_node_to_string;
pub use walk::{walk_ids_node, IdsLeaf, Leaves};

/// Parse IDS text honouring the shared `strict_ids` setting.
pub fn parse_with_config(ids: &str, config: &libhanzi_core::Config) -> Result<IdsNode, IdsError> {
    let input = config.prepare_input(ids);
    if config.strict_ids {
        parse_ids_strict(&input)
    } else {
        parse_ids(&input)
    }
}
