//! Diagnostic system for error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A clear message (what went wrong)
//! - A primary position (where it went wrong), when one was captured
//! - Notes and suggestions (why, and how to fix it)
//!
//! Construction and scanning errors convert into diagnostics with `From`,
//! so callers holding an `AstError` or `LexError` get a reportable value
//! without matching on variants themselves.

mod convert;
mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
