//! IDS tree model.
//!
//! An Ideographic Description Sequence describes how a character is built
//! from components. Each of the 16 composition operators (U+2FF0..=U+2FFF)
//! becomes one `IdsNode` variant with exactly as many children as the
//! operator's arity. Leaves are either a concrete component character or a
//! placeholder for an unidentified component with a known stroke count.

use serde::{Deserialize, Serialize};

/// First code point of the IDS operator block (`⿰`).
pub const OPERATOR_FIRST: u32 = 0x2FF0;
/// Last code point of the IDS operator block (`⿿`).
pub const OPERATOR_LAST: u32 = 0x2FFF;

/// Circled digit one (`①`). Stroke count N is encoded as `STROKE_COUNT_BASE + N`.
const STROKE_COUNT_BASE: u32 = 0x2460 - 1;
/// Largest stroke count with a circled-digit placeholder (`⑳`).
pub const MAX_STROKE_COUNT: u8 = 20;

/// The 16 IDS composition operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdsOperator {
    LeftToRight,
    AboveToBelow,
    LeftToMiddleToRight,
    AboveToMiddleAndBelow,
    FullSurround,
    SurroundFromAbove,
    SurroundFromBelow,
    SurroundFromLeft,
    SurroundFromRight,
    SurroundFromUpperLeft,
    SurroundFromUpperRight,
    SurroundFromLowerLeft,
    SurroundFromLowerRight,
    Overlaid,
    HorizontalReflection,
    Rotation,
}

impl IdsOperator {
    pub const ALL: [IdsOperator; 16] = [
        IdsOperator::LeftToRight,
        IdsOperator::AboveToBelow,
        IdsOperator::LeftToMiddleToRight,
        IdsOperator::AboveToMiddleAndBelow,
        IdsOperator::FullSurround,
        IdsOperator::SurroundFromAbove,
        IdsOperator::SurroundFromBelow,
        IdsOperator::SurroundFromLeft,
        IdsOperator::SurroundFromRight,
        IdsOperator::SurroundFromUpperLeft,
        IdsOperator::SurroundFromUpperRight,
        IdsOperator::SurroundFromLowerLeft,
        IdsOperator::SurroundFromLowerRight,
        IdsOperator::Overlaid,
        IdsOperator::HorizontalReflection,
        IdsOperator::Rotation,
    ];

    /// The operator's scalar in IDS text.
    pub const fn as_char(self) -> char {
        match self {
            IdsOperator::LeftToRight => '⿰',
            IdsOperator::AboveToBelow => '⿱',
            IdsOperator::LeftToMiddleToRight => '⿲',
            IdsOperator::AboveToMiddleAndBelow => '⿳',
            IdsOperator::FullSurround => '⿴',
            IdsOperator::SurroundFromAbove => '⿵',
            IdsOperator::SurroundFromBelow => '⿶',
            IdsOperator::SurroundFromLeft => '⿷',
            IdsOperator::SurroundFromUpperLeft => '⿸',
            IdsOperator::SurroundFromUpperRight => '⿹',
            IdsOperator::SurroundFromLowerLeft => '⿺',
            IdsOperator::Overlaid => '⿻',
            IdsOperator::SurroundFromRight => '⿼',
            IdsOperator::SurroundFromLowerRight => '⿽',
            IdsOperator::HorizontalReflection => '⿾',
            IdsOperator::Rotation => '⿿',
        }
    }

    /// Map a scalar back to its operator, if it is one of the 16.
    pub fn from_char(ch: char) -> Option<Self> {
        IdsOperator::ALL.into_iter().find(|op| op.as_char() == ch)
    }

    /// Number of child components the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            IdsOperator::HorizontalReflection | IdsOperator::Rotation => 1,
            IdsOperator::LeftToMiddleToRight | IdsOperator::AboveToMiddleAndBelow => 3,
            _ => 2,
        }
    }
}

/// Whether `ch` lies in the reserved IDS operator block.
pub fn is_operator_range(ch: char) -> bool {
    (OPERATOR_FIRST..=OPERATOR_LAST).contains(&(ch as u32))
}

/// Stroke count encoded by a circled-digit placeholder (`①`..=`⑳`).
pub fn stroke_count_placeholder(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if cp > STROKE_COUNT_BASE && cp <= STROKE_COUNT_BASE + MAX_STROKE_COUNT as u32 {
        Some((cp - STROKE_COUNT_BASE) as u8)
    } else {
        None
    }
}

/// Placeholder scalar for a stroke count in `1..=20`.
pub fn stroke_count_to_char(stroke_count: u8) -> Option<char> {
    if (1..=MAX_STROKE_COUNT).contains(&stroke_count) {
        char::from_u32(STROKE_COUNT_BASE + stroke_count as u32)
    } else {
        None
    }
}

/// A parsed IDS tree.
///
/// Children are owned, so a tree is finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdsNode {
    LeftToRight {
        left: Box<IdsNode>,
        right: Box<IdsNode>,
    },
    AboveToBelow {
        above: Box<IdsNode>,
        below: Box<IdsNode>,
    },
    LeftToMiddleToRight {
        left: Box<IdsNode>,
        middle: Box<IdsNode>,
        right: Box<IdsNode>,
    },
    AboveToMiddleAndBelow {
        above: Box<IdsNode>,
        middle: Box<IdsNode>,
        below: Box<IdsNode>,
    },
    FullSurround {
        surrounding: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromAbove {
        above: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromBelow {
        below: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromLeft {
        left: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromRight {
        right: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromUpperLeft {
        upper_left: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromUpperRight {
        upper_right: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromLowerLeft {
        lower_left: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    SurroundFromLowerRight {
        lower_right: Box<IdsNode>,
        surrounded: Box<IdsNode>,
    },
    Overlaid {
        overlay: Box<IdsNode>,
        underlay: Box<IdsNode>,
    },
    HorizontalReflection {
        reflected: Box<IdsNode>,
    },
    Rotation {
        rotated: Box<IdsNode>,
    },
    LeafCharacter {
        character: char,
    },
    LeafUnknownCharacter {
        stroke_count: u8,
    },
}

impl IdsNode {
    /// Leaf holding a concrete component.
    pub fn leaf(character: char) -> Self {
        IdsNode::LeafCharacter { character }
    }

    /// Leaf standing in for an unidentified component.
    pub fn unknown(stroke_count: u8) -> Self {
        IdsNode::LeafUnknownCharacter { stroke_count }
    }

    /// Operator of this node, `None` for leaves.
    pub fn operator(&self) -> Option<IdsOperator> {
        let op = match self {
            IdsNode::LeftToRight { .. } => IdsOperator::LeftToRight,
            IdsNode::AboveToBelow { .. } => IdsOperator::AboveToBelow,
            IdsNode::LeftToMiddleToRight { .. } => IdsOperator::LeftToMiddleToRight,
            IdsNode::AboveToMiddleAndBelow { .. } => IdsOperator::AboveToMiddleAndBelow,
            IdsNode::FullSurround { .. } => IdsOperator::FullSurround,
            IdsNode::SurroundFromAbove { .. } => IdsOperator::SurroundFromAbove,
            IdsNode::SurroundFromBelow { .. } => IdsOperator::SurroundFromBelow,
            IdsNode::SurroundFromLeft { .. } => IdsOperator::SurroundFromLeft,
            IdsNode::SurroundFromRight { .. } => IdsOperator::SurroundFromRight,
            IdsNode::SurroundFromUpperLeft { .. } => IdsOperator::SurroundFromUpperLeft,
            IdsNode::SurroundFromUpperRight { .. } => IdsOperator::SurroundFromUpperRight,
            IdsNode::SurroundFromLowerLeft { .. } => IdsOperator::SurroundFromLowerLeft,
            IdsNode::SurroundFromLowerRight { .. } => IdsOperator::SurroundFromLowerRight,
            IdsNode::Overlaid { .. } => IdsOperator::Overlaid,
            IdsNode::HorizontalReflection { .. } => IdsOperator::HorizontalReflection,
            IdsNode::Rotation { .. } => IdsOperator::Rotation,
            IdsNode::LeafCharacter { .. } | IdsNode::LeafUnknownCharacter { .. } => return None,
        };
        Some(op)
    }

    /// Direct children in IDS reading order (the order they are written in
    /// the sequence, which is also field declaration order).
    pub fn children(&self) -> Vec<&IdsNode> {
        match self {
            IdsNode::LeftToRight { left, right } => vec![left, right],
            IdsNode::AboveToBelow { above, below } => vec![above, below],
            IdsNode::LeftToMiddleToRight { left, middle, right } => vec![left, middle, right],
            IdsNode::AboveToMiddleAndBelow { above, middle, below } => {
                vec![above, middle, below]
            }
            IdsNode::FullSurround { surrounding, surrounded } => vec![surrounding, surrounded],
            IdsNode::SurroundFromAbove { above, surrounded } => vec![above, surrounded],
            IdsNode::SurroundFromBelow { below, surrounded } => vec![below, surrounded],
            IdsNode::SurroundFromLeft { left, surrounded } => vec![left, surrounded],
            IdsNode::SurroundFromRight { right, surrounded } => vec![right, surrounded],
            IdsNode::SurroundFromUpperLeft { upper_left, surrounded } => {
                vec![upper_left, surrounded]
            }
            IdsNode::SurroundFromUpperRight { upper_right, surrounded } => {
                vec![upper_right, surrounded]
            }
            IdsNode::SurroundFromLowerLeft { lower_left, surrounded } => {
                vec![lower_left, surrounded]
            }
            IdsNode::SurroundFromLowerRight { lower_right, surrounded } => {
                vec![lower_right, surrounded]
            }
            IdsNode::Overlaid { overlay, underlay } => vec![overlay, underlay],
            IdsNode::HorizontalReflection { reflected } => vec![reflected],
            IdsNode::Rotation { rotated } => vec![rotated],
            IdsNode::LeafCharacter { .. } | IdsNode::LeafUnknownCharacter { .. } => Vec::new(),
        }
        .into_iter()
        .map(|child| &**child)
        .collect()
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        crate::walk::walk_ids_node(self).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_cover_the_reserved_block() {
        let mut cps: Vec<u32> = IdsOperator::ALL.iter().map(|op| op.as_char() as u32).collect();
        cps.sort_unstable();
        let expected: Vec<u32> = (OPERATOR_FIRST..=OPERATOR_LAST).collect();
        assert_eq!(cps, expected);
    }

    #[test]
    fn from_char_inverts_as_char() {
        for op in IdsOperator::ALL {
            assert_eq!(IdsOperator::from_char(op.as_char()), Some(op));
        }
        assert_eq!(IdsOperator::from_char('木'), None);
    }

    #[test]
    fn surround_from_right_sits_after_overlaid() {
        assert_eq!(IdsOperator::Overlaid.as_char() as u32, 0x2FFB);
        assert_eq!(IdsOperator::SurroundFromRight.as_char() as u32, 0x2FFC);
    }

    #[test]
    fn arity_matches_children() {
        let a = || Box::new(IdsNode::leaf('a'));
        let nodes = [
            IdsNode::LeftToMiddleToRight { left: a(), middle: a(), right: a() },
            IdsNode::Overlaid { overlay: a(), underlay: a() },
            IdsNode::Rotation { rotated: a() },
        ];
        for node in &nodes {
            let op = node.operator().unwrap();
            assert_eq!(node.children().len(), op.arity());
        }
        assert!(IdsNode::unknown(3).children().is_empty());
    }

    #[test]
    fn stroke_count_placeholders() {
        assert_eq!(stroke_count_placeholder('①'), Some(1));
        assert_eq!(stroke_count_placeholder('⑳'), Some(20));
        assert_eq!(stroke_count_placeholder('⑴'), None);
        assert_eq!(stroke_count_placeholder('\u{245F}'), None);
        assert_eq!(stroke_count_to_char(1), Some('①'));
        assert_eq!(stroke_count_to_char(20), Some('⑳'));
        assert_eq!(stroke_count_to_char(0), None);
        assert_eq!(stroke_count_to_char(21), None);
    }
}
