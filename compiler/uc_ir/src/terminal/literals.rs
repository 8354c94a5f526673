//! Position-bearing scalar terminals: integer, character, identifier and
//! string literals.

use std::borrow::Cow;

use super::{identity, LocatedTerminal, Terminal};
use crate::{AstError, Position};

/// Integer literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Int {
    value: i64,
    position: Position,
}

impl Terminal for Int {
    const SYMBOL: &'static str = "Int";
    type Value = i64;

    /// Decimal digits with an optional sign. Values outside `i64` are
    /// rejected rather than truncated.
    fn parse(text: &str) -> Result<i64, AstError> {
        text.parse::<i64>()
            .map_err(|err| AstError::coercion(Self::SYMBOL, text, err.to_string()))
    }

    fn value(&self) -> &i64 {
        &self.value
    }

    fn text_value(&self) -> Cow<'_, str> {
        Cow::Owned(self.value.to_string())
    }
}

impl LocatedTerminal for Int {
    fn new(value: i64, position: Position) -> Self {
        Int { value, position }
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Character literal.
///
/// The stored value is the bare character; quotes are added back by
/// [`Terminal::text_value`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Char {
    value: char,
    position: Position,
}

/// Escapes understood inside character literals, as `(escape letter, char)`.
///
/// `\"` is accepted when reading but never produced, since a double quote
/// needs no escape between single quotes.
const CHAR_ESCAPES: &[(char, char)] = &[
    ('n', '\n'),
    ('t', '\t'),
    ('r', '\r'),
    ('0', '\0'),
    ('\\', '\\'),
    ('\'', '\''),
    ('"', '"'),
];

impl Terminal for Char {
    const SYMBOL: &'static str = "Char";
    type Value = char;

    /// Strip one pair of surrounding `'` and read the single character
    /// (or escape) between them.
    fn parse(text: &str) -> Result<char, AstError> {
        let err = |reason: &str| AstError::coercion(Self::SYMBOL, text, reason);

        let inner = text
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .ok_or_else(|| err("expected a quoted character"))?;

        let mut chars = inner.chars();
        let value = match (chars.next(), chars.next(), chars.next()) {
            (Some('\\'), Some(escape), None) => CHAR_ESCAPES
                .iter()
                .find(|(letter, _)| *letter == escape)
                .map(|&(_, c)| c)
                .ok_or_else(|| err("unknown escape sequence"))?,
            // Includes a lone backslash, which stands for itself.
            (Some(c), None, None) => c,
            (None, ..) => return Err(err("empty character literal")),
            _ => return Err(err("expected exactly one character")),
        };
        Ok(value)
    }

    fn value(&self) -> &char {
        &self.value
    }

    fn text_value(&self) -> Cow<'_, str> {
        match CHAR_ESCAPES
            .iter()
            .find(|&&(_, c)| c == self.value && c != '"')
        {
            Some((letter, _)) => Cow::Owned(format!("'\\{letter}'")),
            None => Cow::Owned(format!("'{}'", self.value)),
        }
    }
}

impl LocatedTerminal for Char {
    fn new(value: char, position: Position) -> Self {
        Char { value, position }
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    value: String,
    position: Position,
}

impl Ident {
    /// The identifier's name.
    pub fn name(&self) -> &str {
        &self.value
    }
}

impl Terminal for Ident {
    const SYMBOL: &'static str = "Ident";
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

impl LocatedTerminal for Ident {
    fn new(value: String, position: Position) -> Self {
        Ident { value, position }
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// String literal.
///
/// The token text is stored as given, delimiters included if the scanner
/// kept them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Str {
    value: String,
    position: Position,
}

impl Terminal for Str {
    const SYMBOL: &'static str = "String";
    type Value = String;

    fn parse(text: &str) -> Result<String, AstError> {
        Ok(identity(text))
    }

    fn value(&self) -> &String {
        &self.value
    }

    fn text_value(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self.value))
    }
}

impl LocatedTerminal for Str {
    fn new(value: String, position: Position) -> Self {
        Str { value, position }
    }

    fn position(&self) -> Position {
        self.position
    }
}
