//! Lexer for uC using logos.
//!
//! Produces [`Token`]s carrying raw text and the `(line, offset)` position
//! that terminal construction captures. Values are not coerced here; that
//! happens once, when a reduction builds the leaf node.

mod production;
mod raw_token;

use logos::Logos;
use tracing::debug;
use uc_ir::Position;

use raw_token::RawToken;

pub use production::{to_reduction, TokenProduction};

/// Token category, as seen by the grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `void`, `char` or `int`.
    TypeKeyword,
    /// Other reserved words.
    Keyword,
    Int,
    Char,
    Str,
    Ident,
    Operator,
    /// Delimiters and separators.
    Punct,
}

/// A scanned token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub position: Position,
}

/// Scanning failure.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LexError {
    /// Input that starts no token.
    #[error("unrecognized input `{text}` at {position}")]
    Unrecognized { text: String, position: Position },

    /// A `/*` with no closing `*/`. `end` is where the input runs out.
    #[error("unterminated block comment starting at {position}")]
    UnterminatedComment { position: Position, end: Position },

    /// Offsets beyond `u32::MAX` cannot be represented in a position.
    #[error("source offset {offset} exceeds u32::MAX")]
    SourceTooLarge { offset: usize },
}

impl LexError {
    /// Position of the offending input, when it is representable.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Unrecognized { position, .. }
            | LexError::UnterminatedComment { position, .. } => Some(*position),
            LexError::SourceTooLarge { .. } => None,
        }
    }
}

/// Scan `source` into tokens, skipping whitespace and comments.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let offset =
            u32::try_from(span.start).map_err(|_| LexError::SourceTooLarge { offset: span.start })?;
        let position = Position::new(line, offset);

        // Newlines inside block comments still advance the line
        let newlines = slice.bytes().filter(|&b| b == b'\n').count();
        let newlines =
            u32::try_from(newlines).map_err(|_| LexError::SourceTooLarge { offset: span.end })?;

        match token_result {
            Ok(raw) => {
                line += newlines;
                if let Some(kind) = raw.kind() {
                    tokens.push(Token {
                        kind,
                        text: slice,
                        position,
                    });
                }
            }
            Err(()) if slice.starts_with("/*") => {
                let end = u32::try_from(span.end)
                    .map_err(|_| LexError::SourceTooLarge { offset: span.end })?;
                let end = Position::new(line + newlines, end);
                debug!(%position, %end, "unterminated block comment");
                return Err(LexError::UnterminatedComment { position, end });
            }
            Err(()) => {
                debug!(%position, text = slice, "unrecognized input");
                return Err(LexError::Unrecognized {
                    text: slice.to_owned(),
                    position,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
