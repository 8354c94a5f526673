//! Node construction errors.
//!
//! Construction is a one-shot transform, so every failure is returned to the
//! reduction action that asked for the node. Whether to abort or recover is
//! the parsing engine's call.

use crate::Position;

/// Failure while building an AST node from a production.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AstError {
    /// Token text cannot be converted into the terminal's semantic value.
    #[error("cannot read `{text}` as {symbol}: {reason}")]
    LexicalCoercion {
        symbol: &'static str,
        text: String,
        reason: String,
        position: Option<Position>,
    },

    /// Token text is outside an enumerated terminal's permitted set.
    #[error("`{text}` is not a {symbol}; expected one of {}", .expected.join(", "))]
    EnumMembership {
        symbol: &'static str,
        text: String,
        expected: &'static [&'static str],
        position: Option<Position>,
    },

    /// Requested symbol index is absent from the production.
    #[error("symbol index {index} is out of range for a production of {len} symbols")]
    PositionIndex { index: usize, len: usize },
}

impl AstError {
    /// Coercion failure with no position attached yet.
    #[cold]
    pub fn coercion(symbol: &'static str, text: &str, reason: impl Into<String>) -> Self {
        AstError::LexicalCoercion {
            symbol,
            text: text.to_owned(),
            reason: reason.into(),
            position: None,
        }
    }

    /// Membership failure with no position attached yet.
    #[cold]
    pub fn membership(
        symbol: &'static str,
        text: &str,
        expected: &'static [&'static str],
    ) -> Self {
        AstError::EnumMembership {
            symbol,
            text: text.to_owned(),
            expected,
            position: None,
        }
    }

    /// Attach the position captured for the failing construct.
    ///
    /// A position that is already present is kept.
    #[must_use]
    pub fn at(mut self, captured: Position) -> Self {
        match &mut self {
            AstError::LexicalCoercion { position, .. }
            | AstError::EnumMembership { position, .. } => {
                position.get_or_insert(captured);
            }
            AstError::PositionIndex { .. } => {}
        }
        self
    }

    /// Source position of the failing construct, when one was captured.
    pub fn position(&self) -> Option<Position> {
        match self {
            AstError::LexicalCoercion { position, .. }
            | AstError::EnumMembership { position, .. } => *position,
            AstError::PositionIndex { .. } => None,
        }
    }
}
