//! Conversions from construction and scanning errors.

use uc_ir::AstError;
use uc_lexer::LexError;

use crate::{Diagnostic, ErrorCode};

impl From<&AstError> for Diagnostic {
    fn from(err: &AstError) -> Self {
        let diag = match err {
            AstError::LexicalCoercion { symbol, reason, .. } => {
                Diagnostic::error(ErrorCode::E1001).with_note(format!("{symbol}: {reason}"))
            }
            AstError::EnumMembership {
                symbol, expected, ..
            } => Diagnostic::error(ErrorCode::E1002)
                .with_suggestion(format!("a {symbol} is one of: {}", expected.join(", "))),
            AstError::PositionIndex { .. } => Diagnostic::error(ErrorCode::E9001)
                .with_note("the reduction asked for a symbol its rule did not match"),
        };
        let diag = diag.with_message(err.to_string());
        match err.position() {
            Some(position) => diag.with_label(position, primary_label(err)),
            None => diag,
        }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        match err {
            LexError::Unrecognized { position, .. } => Diagnostic::error(ErrorCode::E0001)
                .with_message(err.to_string())
                .with_label(*position, "no token starts here"),
            LexError::UnterminatedComment { position, end } => Diagnostic::error(ErrorCode::E0003)
                .with_message(err.to_string())
                .with_label(*position, "comment starts here")
                .with_secondary_label(*end, "input ends before `*/`"),
            LexError::SourceTooLarge { .. } => Diagnostic::error(ErrorCode::E0002)
                .with_message(err.to_string())
                .with_note("positions are limited to u32 offsets"),
        }
    }
}

/// Short label text for the primary position.
fn primary_label(err: &AstError) -> &'static str {
    match err {
        AstError::LexicalCoercion { .. } => "invalid literal",
        AstError::EnumMembership { .. } => "unknown keyword",
        AstError::PositionIndex { .. } => "missing symbol",
    }
}
