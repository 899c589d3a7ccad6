//! Error type for IDS parsing.

use thiserror::Error;

/// Errors raised while parsing IDS text.
///
/// Positions count Unicode scalars from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdsError {
    /// The input ran out before an operator received all of its components.
    #[error("unexpected end of IDS at position {position}")]
    UnexpectedEnd { position: usize },

    /// A scalar in the reserved operator block that names no known operator.
    #[error("unexpected combining character {operator} ({}) at position {position}", label(.operator))]
    UnknownOperator { operator: char, position: usize },

    /// Strict parsing found scalars left over after the first complete node.
    #[error("trailing input after IDS node at position {position}")]
    TrailingInput { position: usize },
}

fn label(ch: &char) -> String {
    libhanzi_core::utils::code_point_label(*ch)
}

/// A convenience `Result` alias for IDS operations.
pub type Result<T> = std::result::Result<T, IdsError>;
