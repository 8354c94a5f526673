//! Type specifier keywords.

use std::borrow::Cow;
use std::str::FromStr;

use tracing::trace;

use super::Terminal;
use crate::production::{capture_position, symbol_text, DEFAULT_SYMBOL_INDEX};
use crate::{AstError, Production};

/// Type specifier: one of the three type keywords.
///
/// Instances carry no position. Any occurrence of `int` is the same value,
/// so the enclosing construct is responsible for locating it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSpec {
    Void,
    Char,
    Int,
}

impl TypeSpec {
    /// All members, in declaration order.
    pub const ALL: [TypeSpec; 3] = [TypeSpec::Void, TypeSpec::Char, TypeSpec::Int];

    /// Keyword spellings, parallel to [`TypeSpec::ALL`].
    pub const KEYWORDS: &'static [&'static str] = &["void", "char", "int"];

    /// Source keyword for this type.
    pub const fn keyword(self) -> &'static str {
        match self {
            TypeSpec::Void => "void",
            TypeSpec::Char => "char",
            TypeSpec::Int => "int",
        }
    }

    /// Exact keyword lookup.
    pub fn lookup(text: &str) -> Result<TypeSpec, AstError> {
        match text {
            "void" => Ok(TypeSpec::Void),
            "char" => Ok(TypeSpec::Char),
            "int" => Ok(TypeSpec::Int),
            _ => Err(AstError::membership(Self::SYMBOL, text, Self::KEYWORDS)),
        }
    }

    /// Build from the first symbol of a production.
    ///
    /// The keyword's position is still recorded in the context for the
    /// enclosing construct, but is not stored in the returned value.
    pub fn from_token<P: Production + ?Sized>(ctx: &mut P) -> Result<Self, AstError> {
        let position = capture_position(ctx, DEFAULT_SYMBOL_INDEX)?;
        let text = symbol_text(&*ctx, DEFAULT_SYMBOL_INDEX)?;
        let spec = Self::lookup(text).map_err(|err| err.at(position))?;
        trace!(symbol = Self::SYMBOL, text, %position, "built terminal");
        Ok(spec)
    }
}

impl FromStr for TypeSpec {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl Terminal for TypeSpec {
    const SYMBOL: &'static str = "TypeSpec";
    type Value = TypeSpec;

    fn parse(text: &str) -> Result<TypeSpec, AstError> {
        Self::lookup(text)
    }

    fn value(&self) -> &TypeSpec {
        self
    }

    fn text_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.keyword())
    }
}
