//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before line
//! tracking and conversion to [`crate::Token`].

use logos::Logos;

use crate::TokenKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("void")]
    #[token("char")]
    #[token("int")]
    TypeKeyword,

    #[token("if")]
    #[token("else")]
    #[token("while")]
    #[token("for")]
    #[token("return")]
    #[token("break")]
    Keyword,

    #[regex("[0-9]+")]
    Int,

    #[regex(r"'([^'\\\n]|\\.)'")]
    Char,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("=")]
    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("!")]
    #[token("&")]
    #[token("&&")]
    #[token("||")]
    Operator,

    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[token(",")]
    #[token(";")]
    Punct,
}

/// Extend a block comment through its closing `*/`. Comments do not nest.
///
/// The comment is kept as a token so the caller can count the lines it
/// spans. An unterminated comment consumes the rest of the input and fails.
fn block_comment(lexer: &mut logos::Lexer<RawToken>) -> bool {
    match lexer.remainder().find("*/") {
        Some(end) => {
            lexer.bump(end + 2);
            true
        }
        None => {
            lexer.bump(lexer.remainder().len());
            false
        }
    }
}

impl RawToken {
    /// Public token kind, or `None` for trivia.
    pub(crate) fn kind(self) -> Option<TokenKind> {
        match self {
            RawToken::Newline | RawToken::LineComment | RawToken::BlockComment => None,
            RawToken::TypeKeyword => Some(TokenKind::TypeKeyword),
            RawToken::Keyword => Some(TokenKind::Keyword),
            RawToken::Int => Some(TokenKind::Int),
            RawToken::Char => Some(TokenKind::Char),
            RawToken::Str => Some(TokenKind::Str),
            RawToken::Ident => Some(TokenKind::Ident),
            RawToken::Operator => Some(TokenKind::Operator),
            RawToken::Punct => Some(TokenKind::Punct),
        }
    }
}
