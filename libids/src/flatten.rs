//! Collapse chained binary layouts into their ternary operator.
//!
//! `⿱⿱abc` and `⿱a⿱bc` both mean "a over b over c", which IDS spells
//! canonically as `⿳abc`; likewise `⿰⿰abc` / `⿰a⿰bc` become `⿲abc`.
//!
//! The rewrite is shallow: only the root and the components of a node that
//! was just collapsed are revisited. A chain nested under any other
//! operator is left alone, so callers that want every subtree normalized
//! must apply `flatten_ids` while rebuilding the tree themselves.

use crate::node::IdsNode;

/// Rewrite `node` if it matches one of the four chained shapes.
///
/// The leaf reading order is unchanged.
pub fn flatten_ids(node: IdsNode) -> IdsNode {
    match node {
        IdsNode::AboveToBelow { above, below } => match (*above, *below) {
            (IdsNode::AboveToBelow { above, below: middle }, below) => {
                IdsNode::AboveToMiddleAndBelow {
                    above: flatten_boxed(above),
                    middle: flatten_boxed(middle),
                    below: Box::new(flatten_ids(below)),
                }
            }
            (above, IdsNode::AboveToBelow { above: middle, below }) => {
                IdsNode::AboveToMiddleAndBelow {
                    above: Box::new(flatten_ids(above)),
                    middle: flatten_boxed(middle),
                    below: flatten_boxed(below),
                }
            }
            (above, below) => IdsNode::AboveToBelow {
                above: Box::new(above),
                below: Box::new(below),
            },
        },
        IdsNode::LeftToRight { left, right } => match (*left, *right) {
            (IdsNode::LeftToRight { left, right: middle }, right) => IdsNode::LeftToMiddleToRight {
                left: flatten_boxed(left),
                middle: flatten_boxed(middle),
                right: Box::new(flatten_ids(right)),
            },
            (left, IdsNode::LeftToRight { left: middle, right }) => IdsNode::LeftToMiddleToRight {
                left: Box::new(flatten_ids(left)),
                middle: flatten_boxed(middle),
                right: flatten_boxed(right),
            },
            (left, right) => IdsNode::LeftToRight {
                left: Box::new(left),
                right: Box::new(right),
            },
        },
        node @ (IdsNode::LeftToMiddleToRight { .. }
        | IdsNode::AboveToMiddleAndBelow { .. }
        | IdsNode::FullSurround { .. }
        | IdsNode::SurroundFromAbove { .. }
        | IdsNode::SurroundFromBelow { .. }
        | IdsNode::SurroundFromLeft { .. }
        | IdsNode::SurroundFromRight { .. }
        | IdsNode::SurroundFromUpperLeft { .. }
        | IdsNode::SurroundFromUpperRight { .. }
        | IdsNode::SurroundFromLowerLeft { .. }
        | IdsNode::SurroundFromLowerRight { .. }
        | IdsNode::Overlaid { .. }
        | IdsNode::HorizontalReflection { .. }
        | IdsNode::Rotation { .. }
        | IdsNode::LeafCharacter { .. }
        | IdsNode::LeafUnknownCharacter { .. }) => node,
    }
}

fn flatten_boxed(node: Box<IdsNode>) -> Box<IdsNode> {
    Box::new(flatten_ids(*node))
}
