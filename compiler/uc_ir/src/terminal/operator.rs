//! Operator lexemes.

use std::borrow::Cow;

use tracing::trace;

use super::{identity, Terminal};
use crate::production::{capture_position, symbol_text, DEFAULT_SYMBOL_INDEX};
use crate::{AstError, Position, Production};

/// Whether building an operator records its token position.
///
/// The same operator token can be consumed at two grammar sites. The second
/// site must skip capture, or it would overwrite the position the first
/// site recorded in the production context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PositionCapture {
    /// Capture the position, store it, and record it in the context.
    #[default]
    Record,
    /// Leave the context untouched; the operator carries no position.
    Skip,
}

/// Operator lexeme, such as `+`, `==` or `!`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator {
    value: String,
    position: Option<Position>,
}

impl Operator {
    /// Build from an already-known lexeme.
    pub fn new(value: impl Into<String>, position: Option<Position>) -> Self {
        Operator {
            value: value.into(),
            position,
        }
    }

    /// Build from the first symbol of a production.
    pub fn from_token<P: Production + ?Sized>(
        ctx: &mut P,
        capture: PositionCapture,
    ) -> Result<Self, AstError> {
        let position = match capture {
            PositionCapture::Record => Some(capture_position(ctx, DEFAULT_SYMBOL_INDEX)?),
            PositionCapture::Skip => None,
        };
        let text = symbol_text(&*ctx, DEFAULT_SYMBOL_INDEX)?;
        trace!(symbol = Self::SYMBOL, text, ?position, "built terminal");
        Ok(Operator::new(Self::parse(text)?, position))
    }

    /// The lexeme.
    pub fn lexeme(&self) -> &str {
        &self.value
    }

    /// Position captured at construction, if capture was requested.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl Terminal for Operator {
    const SYMBOL: &'static str = "Operator";
    type Value = String;

    fn parse(text: &str) -> Result<String, AstError> {
        Ok(identity(text))
    }

    fn value(&self) -> &String {
        &self.value
    }

    fn text_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }
}
