/*!
Recursive-descent IDS parser.

Each call consumes exactly one node: an operator scalar followed by as many
child nodes as its arity, or a single leaf scalar. The caller owns the
`Cursor`, so several sequences can be read back to back from one string and
the final position tells whether anything was left over.
*/

use tracing::trace;

use crate::error::{IdsError, Result};
use crate::node::{is_operator_range, stroke_count_placeholder, IdsNode, IdsOperator};

/// Parse position, counted in Unicode scalars from the start of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Parse one node from the start of `ids`.
///
/// Anything after the first complete node is ignored; use
/// [`parse_ids_strict`] to reject it.
///
/// ```
/// use libids::{parse_ids, IdsNode};
///
/// let node = parse_ids("⿰木目").unwrap();
/// assert_eq!(
///     node,
///     IdsNode::LeftToRight {
///         left: Box::new(IdsNode::leaf('木')),
///         right: Box::new(IdsNode::leaf('目')),
///     }
/// );
/// ```
pub fn parse_ids(ids: &str) -> Result<IdsNode> {
    let mut cursor = Cursor::default();
    parse_ids_at(ids, &mut cursor)
}

/// Parse one node starting at `cursor`, advancing it past the node.
///
/// On error the cursor is left where the failure was detected. Each call
/// skips `cursor.index` scalars from the start of `ids`; when reading many
/// sequences from one long string, decode it once and use
/// [`parse_ids_chars`].
pub fn parse_ids_at(ids: &str, cursor: &mut Cursor) -> Result<IdsNode> {
    let mut chars = ids.chars().skip(cursor.index);
    parse_node(&mut chars, &mut cursor.index)
}

/// Like [`parse_ids_at`], over scalars the caller has already decoded.
///
/// ```
/// use libids::{parse_ids_chars, Cursor};
///
/// let text: Vec<char> = "⿰木目口".chars().collect();
/// let mut cursor = Cursor::default();
/// parse_ids_chars(&text, &mut cursor).unwrap();
/// assert_eq!(cursor.index, 3);
/// ```
pub fn parse_ids_chars(chars: &[char], cursor: &mut Cursor) -> Result<IdsNode> {
    let rest = chars.get(cursor.index..).unwrap_or_default();
    parse_node(&mut rest.iter().copied(), &mut cursor.index)
}

/// Parse `ids` as exactly one node with nothing after it.
pub fn parse_ids_strict(ids: &str) -> Result<IdsNode> {
    let mut chars = ids.chars();
    let mut index = 0;
    let node = parse_node(&mut chars, &mut index)?;
    if chars.next().is_some() {
        return Err(IdsError::TrailingInput { position: index });
    }
    Ok(node)
}

fn parse_node<I: Iterator<Item = char>>(chars: &mut I, index: &mut usize) -> Result<IdsNode> {
    let position = *index;
    let ch = chars.next().ok_or(IdsError::UnexpectedEnd { position })?;
    *index += 1;

    if is_operator_range(ch) {
        let op = IdsOperator::from_char(ch).ok_or(IdsError::UnknownOperator {
            operator: ch,
            position,
        })?;
        trace!(?op, position, "descending into operator");
        return parse_operands(op, chars, index);
    }

    if let Some(stroke_count) = stroke_count_placeholder(ch) {
        return Ok(IdsNode::LeafUnknownCharacter { stroke_count });
    }

    Ok(IdsNode::LeafCharacter { character: ch })
}

fn parse_operands<I: Iterator<Item = char>>(
    op: IdsOperator,
    chars: &mut I,
    index: &mut usize,
) -> Result<IdsNode> {
    let mut next = || parse_node(chars, index).map(Box::new);

    let node = match op {
        IdsOperator::LeftToRight => {
            let left = next()?;
            let right = next()?;
            IdsNode::LeftToRight { left, right }
        }
        IdsOperator::AboveToBelow => {
            let above = next()?;
            let below = next()?;
            IdsNode::AboveToBelow { above, below }
        }
        IdsOperator::LeftToMiddleToRight => {
            let left = next()?;
            let middle = next()?;
            let right = next()?;
            IdsNode::LeftToMiddleToRight { left, middle, right }
        }
        IdsOperator::AboveToMiddleAndBelow => {
            let above = next()?;
            let middle = next()?;
            let below = next()?;
            IdsNode::AboveToMiddleAndBelow { above, middle, below }
        }
        IdsOperator::FullSurround => {
            let surrounding = next()?;
            let surrounded = next()?;
            IdsNode::FullSurround { surrounding, surrounded }
        }
        IdsOperator::SurroundFromAbove => {
            let above = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromAbove { above, surrounded }
        }
        IdsOperator::SurroundFromBelow => {
            let below = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromBelow { below, surrounded }
        }
        IdsOperator::SurroundFromLeft => {
            let left = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromLeft { left, surrounded }
        }
        IdsOperator::SurroundFromRight => {
            let right = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromRight { right, surrounded }
        }
        IdsOperator::SurroundFromUpperLeft => {
            let upper_left = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromUpperLeft { upper_left, surrounded }
        }
        IdsOperator::SurroundFromUpperRight => {
            let upper_right = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromUpperRight { upper_right, surrounded }
        }
        IdsOperator::SurroundFromLowerLeft => {
            let lower_left = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromLowerLeft { lower_left, surrounded }
        }
        IdsOperator::SurroundFromLowerRight => {
            let lower_right = next()?;
            let surrounded = next()?;
            IdsNode::SurroundFromLowerRight { lower_right, surrounded }
        }
        IdsOperator::Overlaid => {
            let overlay = next()?;
            let underlay = next()?;
            IdsNode::Overlaid { overlay, underlay }
        }
        IdsOperator::HorizontalReflection => {
            let reflected = next()?;
            IdsNode::HorizontalReflection { reflected }
        }
        IdsOperator::Rotation => {
            let rotated = next()?;
            IdsNode::Rotation { rotated }
        }
    };

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(c: char) -> Box<IdsNode> {
        Box::new(IdsNode::leaf(c))
    }

    #[test]
    fn single_leaf() {
        assert_eq!(parse_ids("木").unwrap(), IdsNode::leaf('木'));
    }

    #[test]
    fn non_cjk_leaf_is_accepted() {
        assert_eq!(parse_ids("a").unwrap(), IdsNode::leaf('a'));
        assert_eq!(parse_ids("𠂇").unwrap(), IdsNode::leaf('𠂇'));
    }

    #[test]
    fn cursor_advances_past_one_node() {
        let mut cursor = Cursor::default();
        let node = parse_ids_at("⿰a⿱bc", &mut cursor).unwrap();
        assert_eq!(cursor, Cursor::new(5));
        assert_eq!(
            node,
            IdsNode::LeftToRight {
                left: leaf('a'),
                right: Box::new(IdsNode::AboveToBelow {
                    above: leaf('b'),
                    below: leaf('c'),
                }),
            }
        );
    }

    #[test]
    fn cursor_reads_sequences_back_to_back() {
        let text = "⿱口木⿰木目";
        let mut cursor = Cursor::default();
        let first = parse_ids_at(text, &mut cursor).unwrap();
        let second = parse_ids_at(text, &mut cursor).unwrap();
        assert_eq!(cursor.index, 6);
        assert_eq!(first.operator(), Some(IdsOperator::AboveToBelow));
        assert_eq!(second.operator(), Some(IdsOperator::LeftToRight));
    }

    #[test]
    fn decoded_text_reads_back_to_back() {
        let text: Vec<char> = "⿱口木⑤⿻工从".chars().collect();
        let mut cursor = Cursor::default();
        let mut nodes = Vec::new();
        let mut stops = Vec::new();
        while cursor.index < text.len() {
            nodes.push(parse_ids_chars(&text, &mut cursor).unwrap());
            stops.push(cursor.index);
        }
        assert_eq!(stops, [3, 4, 7]);
        assert_eq!(nodes[1], IdsNode::unknown(5));
        assert_eq!(nodes[2].operator(), Some(IdsOperator::Overlaid));
        assert_eq!(
            parse_ids_chars(&text, &mut cursor),
            Err(IdsError::UnexpectedEnd { position: 7 })
        );
    }

    #[test]
    fn cursor_past_the_end_is_unexpected_end() {
        let mut cursor = Cursor::new(9);
        assert_eq!(
            parse_ids_at("⿰木目", &mut cursor),
            Err(IdsError::UnexpectedEnd { position: 9 })
        );
        let text: Vec<char> = "木".chars().collect();
        assert_eq!(
            parse_ids_chars(&text, &mut cursor),
            Err(IdsError::UnexpectedEnd { position: 9 })
        );
    }

    #[test]
    fn trailing_input_is_ignored_by_default() {
        assert_eq!(parse_ids("木目").unwrap(), IdsNode::leaf('木'));
    }

    #[test]
    fn strict_rejects_trailing_input() {
        assert_eq!(
            parse_ids_strict("木目"),
            Err(IdsError::TrailingInput { position: 1 })
        );
        assert!(parse_ids_strict("⿰木目").is_ok());
    }

    #[test]
    fn empty_input_is_unexpected_end() {
        assert_eq!(parse_ids(""), Err(IdsError::UnexpectedEnd { position: 0 }));
    }

    #[test]
    fn missing_operand_is_unexpected_end() {
        assert_eq!(
            parse_ids("⿰木"),
            Err(IdsError::UnexpectedEnd { position: 2 })
        );
        assert_eq!(
            parse_ids("⿲木目"),
            Err(IdsError::UnexpectedEnd { position: 3 })
        );
    }

    #[test]
    fn circled_digits_become_unknown_leaves() {
        assert_eq!(parse_ids("①").unwrap(), IdsNode::unknown(1));
        assert_eq!(parse_ids("⑩").unwrap(), IdsNode::unknown(10));
        assert_eq!(parse_ids("⑳").unwrap(), IdsNode::unknown(20));
    }

    #[test]
    fn error_messages_name_the_position() {
        let err = parse_ids("⿱口").unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of IDS at position 2");
    }
}
