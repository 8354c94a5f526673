//! Terminal symbols.
//!
//! A terminal is a leaf node built from exactly one token. Each kind has its
//! own coercion rule from raw token text to a semantic value, run once at
//! construction.
//!
//! # Construction Paths
//!
//! - [`LocatedTerminal::from_token`]: the shared path. Captures the position
//!   of the first matched symbol, then coerces its text. `Int`, `Char`,
//!   `Ident` and `Str` use it.
//! - [`TypeSpec::from_token`]: closed keyword lookup, no stored position.
//! - [`Operator::from_token`]: position capture is an explicit caller choice.
//!
//! Every terminal displays as `<SYMBOL>::<text value>`.

mod literals;
mod operator;
mod type_spec;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::production::{capture_position, symbol_text, DEFAULT_SYMBOL_INDEX};
use crate::{AstError, Position, Production};

pub use literals::{Char, Ident, Int, Str};
pub use operator::{Operator, PositionCapture};
pub use type_spec::TypeSpec;

/// Behaviour shared by every leaf node kind.
pub trait Terminal: Sized {
    /// Variant name, used in traces and diagnostics.
    const SYMBOL: &'static str;

    /// Semantic value produced by [`Terminal::parse`].
    type Value;

    /// Coerce raw token text into the semantic value.
    fn parse(text: &str) -> Result<Self::Value, AstError>;

    /// The stored semantic value.
    fn value(&self) -> &Self::Value;

    /// Value as it should appear in messages.
    fn text_value(&self) -> Cow<'_, str>;
}

/// A terminal that records the position of its own token.
pub trait LocatedTerminal: Terminal {
    /// Build from an already-coerced value.
    fn new(value: Self::Value, position: Position) -> Self;

    /// Position captured at construction.
    fn position(&self) -> Position;

    /// Build from the first symbol of a production.
    ///
    /// The position is captured before coercion, so a coercion error still
    /// carries the token's location.
    fn from_token<P: Production + ?Sized>(ctx: &mut P) -> Result<Self, AstError> {
        let position = capture_position(ctx, DEFAULT_SYMBOL_INDEX)?;
        let text = symbol_text(&*ctx, DEFAULT_SYMBOL_INDEX)?;
        let value = Self::parse(text).map_err(|err| {
            debug!(symbol = Self::SYMBOL, %position, error = %err, "terminal coercion failed");
            err.at(position)
        })?;
        trace!(symbol = Self::SYMBOL, text, %position, "built terminal");
        Ok(Self::new(value, position))
    }
}

/// Identity coercion for text-valued terminals.
fn identity(text: &str) -> String {
    text.to_owned()
}

/// Implements `Display` as `<SYMBOL>::<text value>`.
macro_rules! impl_terminal_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(
                        f,
                        "{}::{}",
                        <$ty as $crate::Terminal>::SYMBOL,
                        $crate::Terminal::text_value(self)
                    )
                }
            }
        )+
    };
}

impl_terminal_display!(TypeSpec, Int, Char, Ident, Str, Operator);

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
