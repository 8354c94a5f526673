//! Production contexts over scanned tokens.

use uc_ir::{Position, Production, Reduction};

use crate::Token;

/// Borrowed production context over the tokens one rule matched.
///
/// `tokens[0]` is symbol 1, as in the grammar rule.
#[derive(Debug)]
pub struct TokenProduction<'t, 'src> {
    tokens: &'t [Token<'src>],
    position: Option<Position>,
}

impl<'t, 'src> TokenProduction<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        TokenProduction {
            tokens,
            position: None,
        }
    }

    /// Position recorded by the reduction action, if any.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    fn token(&self, index: usize) -> Option<&Token<'src>> {
        index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }
}

impl Production for TokenProduction<'_, '_> {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.token(index).map(|t| t.text)
    }

    fn lineno(&self, index: usize) -> Option<u32> {
        self.token(index).map(|t| t.position.line)
    }

    fn lexpos(&self, index: usize) -> Option<u32> {
        self.token(index).map(|t| t.position.offset)
    }

    fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

/// Copy matched tokens into an owned [`Reduction`].
pub fn to_reduction(tokens: &[Token<'_>]) -> Reduction {
    tokens
        .iter()
        .fold(Reduction::new(), |r, t| r.with_symbol(t.text, t.position))
}
