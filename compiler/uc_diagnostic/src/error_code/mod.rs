//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Node construction errors
/// - E9xxx: Internal errors (the parsing engine broke a contract)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized input
    E0001,
    /// Source too large to address
    E0002,
    /// Unterminated block comment
    E0003,

    // Construction Errors (E1xxx)
    /// Token text cannot be coerced to the terminal's value
    E1001,
    /// Keyword outside an enumerated terminal's set
    E1002,

    // Internal Errors (E9xxx)
    /// Symbol index absent from the production
    E9001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E9001,
    ];

    /// Get the string representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized input",
            ErrorCode::E0002 => "source too large",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E1001 => "invalid literal",
            ErrorCode::E1002 => "unknown keyword",
            ErrorCode::E9001 => "missing production symbol",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003
        )
    }

    /// Check if this is a node construction error (E1xxx range).
    pub fn is_construction_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
