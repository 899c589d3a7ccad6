//! Leaf traversal in visual reading order.

use std::fmt;

use crate::node::{stroke_count_to_char, IdsNode};

/// A leaf component yielded by [`walk_ids_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdsLeaf {
    Character(char),
    UnknownCharacter(u8),
}

impl IdsLeaf {
    /// The scalar this leaf is written with in IDS text.
    pub fn as_char(self) -> char {
        match self {
            IdsLeaf::Character(c) => c,
            IdsLeaf::UnknownCharacter(n) => {
                stroke_count_to_char(n).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
        }
    }
}

impl fmt::Display for IdsLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdsLeaf::Character(c) => write!(f, "{}", c),
            IdsLeaf::UnknownCharacter(n) => write!(f, "<{} strokes>", n),
        }
    }
}

/// Lazy iterator over the leaves of a tree.
///
/// Holds only a stack of pending borrowed subtrees; cloning it or calling
/// [`walk_ids_node`] again starts an independent walk.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a IdsNode>,
}

/// Walk the leaves of `node` left-to-right, top-to-bottom.
///
/// Children are visited in parser order except for `Overlaid`, whose
/// underlay is yielded before its overlay (paint order).
///
/// ```
/// use libids::{parse_ids, walk_ids_node, IdsLeaf};
///
/// let tree = parse_ids("⿰a⿱bc").unwrap();
/// let leaves: Vec<IdsLeaf> = walk_ids_node(&tree).collect();
/// assert_eq!(
///     leaves,
///     [IdsLeaf::Character('a'), IdsLeaf::Character('b'), IdsLeaf::Character('c')]
/// );
/// ```
pub fn walk_ids_node(node: &IdsNode) -> Leaves<'_> {
    Leaves { stack: vec![node] }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = IdsLeaf;

    fn next(&mut self) -> Option<IdsLeaf> {
        while let Some(node) = self.stack.pop() {
            // Push in reverse so the first child to visit is on top.
            match node {
                IdsNode::LeafCharacter { character } => return Some(IdsLeaf::Character(*character)),
                IdsNode::LeafUnknownCharacter { stroke_count } => {
                    return Some(IdsLeaf::UnknownCharacter(*stroke_count))
                }
                IdsNode::LeftToRight { left, right } => self.push(&[&**left, &**right]),
                IdsNode::AboveToBelow { above, below } => self.push(&[&**above, &**below]),
                IdsNode::LeftToMiddleToRight { left, middle, right } => {
                    self.push(&[&**left, &**middle, &**right])
                }
                IdsNode::AboveToMiddleAndBelow { above, middle, below } => {
                    self.push(&[&**above, &**middle, &**below])
                }
                IdsNode::FullSurround { surrounding, surrounded } => {
                    self.push(&[&**surrounding, &**surrounded])
                }
                IdsNode::SurroundFromAbove { above, surrounded } => {
                    self.push(&[&**above, &**surrounded])
                }
                IdsNode::SurroundFromBelow { below, surrounded } => {
                    self.push(&[&**below, &**surrounded])
                }
                IdsNode::SurroundFromLeft { left, surrounded } => {
                    self.push(&[&**left, &**surrounded])
                }
                IdsNode::SurroundFromRight { right, surrounded } => {
                    self.push(&[&**right, &**surrounded])
                }
                IdsNode::SurroundFromUpperLeft { upper_left, surrounded } => {
                    self.push(&[&**upper_left, &**surrounded])
                }
                IdsNode::SurroundFromUpperRight { upper_right, surrounded } => {
                    self.push(&[&**upper_right, &**surrounded])
                }
                IdsNode::SurroundFromLowerLeft { lower_left, surrounded } => {
                    self.push(&[&**lower_left, &**surrounded])
                }
                IdsNode::SurroundFromLowerRight { lower_right, surrounded } => {
                    self.push(&[&**lower_right, &**surrounded])
                }
                // Underlay first, unlike the field order.
                IdsNode::Overlaid { overlay, underlay } => self.push(&[&**underlay, &**overlay]),
                IdsNode::HorizontalReflection { reflected } => self.push(&[&**reflected]),
                IdsNode::Rotation { rotated } => self.push(&[&**rotated]),
            }
        }
        None
    }
}

impl<'a> Leaves<'a> {
    fn push(&mut self, visit_order: &[&'a IdsNode]) {
        self.stack.extend(visit_order.iter().rev().copied());
    }
}
