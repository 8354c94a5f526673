//! Production context and position capture.
//!
//! The parsing engine runs one reduction action per grammar rule. During
//! that action it hands over a production context: the matched right-hand
//! side symbols (1-based, as in the grammar rule) plus a result slot that
//! records the position of the construct being built.
//!
//! The context is borrowed mutably for one reduction only; nodes never keep
//! a reference to it.

use tracing::trace;

use crate::{AstError, Position};

/// Symbol index used when a construct starts at its first matched symbol.
pub const DEFAULT_SYMBOL_INDEX: usize = 1;

/// Per-reduction data supplied by the parsing engine.
///
/// Indices are 1-based: `1..=len()` address the matched right-hand side
/// symbols. Accessors return `None` for any other index.
pub trait Production {
    /// Number of matched right-hand side symbols.
    fn len(&self) -> usize;

    /// True if the rule matched no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw text of the symbol at `index`.
    fn text(&self, index: usize) -> Option<&str>;

    /// 1-based line of the symbol at `index`.
    fn lineno(&self, index: usize) -> Option<u32>;

    /// Lexical offset of the symbol at `index`.
    fn lexpos(&self, index: usize) -> Option<u32>;

    /// Record the position of the construct being built.
    fn set_position(&mut self, position: Position);
}

/// Capture the position of the symbol at `index` as the position of the
/// construct being reduced.
///
/// The pair is written into the context's result slot and returned.
pub fn capture_position<P: Production + ?Sized>(
    ctx: &mut P,
    index: usize,
) -> Result<Position, AstError> {
    let out_of_range = || AstError::PositionIndex {
        index,
        len: ctx.len(),
    };
    let line = ctx.lineno(index).ok_or_else(out_of_range)?;
    let offset = ctx.lexpos(index).ok_or_else(out_of_range)?;

    let position = Position::new(line, offset);
    ctx.set_position(position);
    trace!(index, line, offset, "captured symbol position");
    Ok(position)
}

/// Raw text of the symbol at `index`, or an index error.
pub fn symbol_text<P: Production + ?Sized>(ctx: &P, index: usize) -> Result<&str, AstError> {
    ctx.text(index).ok_or(AstError::PositionIndex {
        index,
        len: ctx.len(),
    })
}

/// One matched right-hand side symbol.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct Symbol {
    text: String,
    position: Position,
}

/// Owned production context.
///
/// Parsing engines that do not carry their own context type can fill one of
/// these per reduction and read the recorded position back afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Reduction {
    symbols: Vec<Symbol>,
    position: Option<Position>,
}

impl Reduction {
    /// Create an empty reduction.
    pub fn new() -> Self {
        Reduction::default()
    }

    /// Append a matched symbol.
    pub fn push(&mut self, text: impl Into<String>, position: Position) {
        self.symbols.push(Symbol {
            text: text.into(),
            position,
        });
    }

    /// Builder form of [`Reduction::push`].
    #[must_use]
    pub fn with_symbol(mut self, text: impl Into<String>, position: Position) -> Self {
        self.push(text, position);
        self
    }

    /// Position recorded for the construct, if any reduction action set one.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    fn symbol(&self, index: usize) -> Option<&Symbol> {
        index.checked_sub(1).and_then(|i| self.symbols.get(i))
    }
}

impl Production for Reduction {
    fn len(&self) -> usize {
        self.symbols.len()
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.symbol(index).map(|s| s.text.as_str())
    }

    fn lineno(&self, index: usize) -> Option<u32> {
        self.symbol(index).map(|s| s.position.line)
    }

    fn lexpos(&self, index: usize) -> Option<u32> {
        self.symbol(index).map(|s| s.position.offset)
    }

    fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

#[cfg(test)]
mod tests;
