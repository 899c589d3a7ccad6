//! IDS serializer, the inverse of `parser`.

use std::fmt;

use crate::node::{stroke_count_to_char, IdsNode, IdsOperator};

/// Render a tree back to IDS text.
///
/// Children are written in the same order the parser reads them, so
/// `ids_node_to_string(&parse_ids(s)?) == s` for any well-formed `s`.
pub fn ids_node_to_string(node: &IdsNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn emit(op: IdsOperator, children: &[&IdsNode], out: &mut String) {
    out.push(op.as_char());
    for child in children {
        write_node(child, out);
    }
}

fn write_node(node: &IdsNode, out: &mut String) {
    match node {
        IdsNode::LeftToRight { left, right } => {
            emit(IdsOperator::LeftToRight, &[&**left, &**right], out)
        }
        IdsNode::AboveToBelow { above, below } => {
            emit(IdsOperator::AboveToBelow, &[&**above, &**below], out)
        }
        IdsNode::LeftToMiddleToRight { left, middle, right } => {
            emit(IdsOperator::LeftToMiddleToRight, &[&**left, &**middle, &**right], out)
        }
        IdsNode::AboveToMiddleAndBelow { above, middle, below } => {
            emit(IdsOperator::AboveToMiddleAndBelow, &[&**above, &**middle, &**below], out)
        }
        IdsNode::FullSurround { surrounding, surrounded } => {
            emit(IdsOperator::FullSurround, &[&**surrounding, &**surrounded], out)
        }
        IdsNode::SurroundFromAbove { above, surrounded } => {
            emit(IdsOperator::SurroundFromAbove, &[&**above, &**surrounded], out)
        }
        IdsNode::SurroundFromBelow { below, surrounded } => {
            emit(IdsOperator::SurroundFromBelow, &[&**below, &**surrounded], out)
        }
        IdsNode::SurroundFromLeft { left, surrounded } => {
            emit(IdsOperator::SurroundFromLeft, &[&**left, &**surrounded], out)
        }
        IdsNode::SurroundFromRight { right, surrounded } => {
            emit(IdsOperator::SurroundFromRight, &[&**right, &**surrounded], out)
        }
        IdsNode::SurroundFromUpperLeft { upper_left, surrounded } => {
            emit(IdsOperator::SurroundFromUpperLeft, &[&**upper_left, &**surrounded], out)
        }
        IdsNode::SurroundFromUpperRight { upper_right, surrounded } => {
            emit(IdsOperator::SurroundFromUpperRight, &[&**upper_right, &**surrounded], out)
        }
        IdsNode::SurroundFromLowerLeft { lower_left, surrounded } => {
            emit(IdsOperator::SurroundFromLowerLeft, &[&**lower_left, &**surrounded], out)
        }
        IdsNode::SurroundFromLowerRight { lower_right, surrounded } => {
            emit(IdsOperator::SurroundFromLowerRight, &[&**lower_right, &**surrounded], out)
        }
        IdsNode::Overlaid { overlay, underlay } => {
            emit(IdsOperator::Overlaid, &[&**overlay, &**underlay], out)
        }
        IdsNode::HorizontalReflection { reflected } => {
            emit(IdsOperator::HorizontalReflection, &[&**reflected], out)
        }
        IdsNode::Rotation { rotated } => emit(IdsOperator::Rotation, &[&**rotated], out),
        IdsNode::LeafCharacter { character } => out.push(*character),
        IdsNode::LeafUnknownCharacter { stroke_count } => {
            // Out-of-range counts only arise from hand-built trees; the
            // parser never produces them.
            if let Some(ch) = stroke_count_to_char(*stroke_count) {
                out.push(ch);
            } else {
                tracing::warn!(stroke_count, "stroke count has no placeholder scalar");
                out.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
}

impl fmt::Display for IdsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ids_node_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ids;

    #[test]
    fn leaves_render_themselves() {
        assert_eq!(ids_node_to_string(&IdsNode::leaf('木')), "木");
        assert_eq!(ids_node_to_string(&IdsNode::unknown(7)), "⑦");
    }

    #[test]
    fn nested_round_trip() {
        for input in ["⿰a⿱bc", "⿱a⿳bc⿴de", "⿻⿰ab⿾c", "⿺⑤⿿凹"] {
            assert_eq!(ids_node_to_string(&parse_ids(input).unwrap()), input);
        }
    }

    #[test]
    fn every_operator_writes_its_children_in_order() {
        for op in IdsOperator::ALL {
            let mut input = op.as_char().to_string();
            input.extend(['甲', '乙', '丙'].into_iter().take(op.arity()));
            let node = parse_ids(&input).unwrap();
            assert_eq!(ids_node_to_string(&node), input, "{:?}", op);
        }
    }

    #[test]
    fn display_matches_serializer() {
        let node = parse_ids("⿸疒丙").unwrap();
        assert_eq!(node.to_string(), "⿸疒丙");
    }

    #[test]
    fn overlaid_serializes_overlay_first() {
        let node = IdsNode::Overlaid {
            overlay: Box::new(IdsNode::leaf('工')),
            underlay: Box::new(IdsNode::leaf('从')),
        };
        assert_eq!(node.to_string(), "⿻工从");
    }
}
