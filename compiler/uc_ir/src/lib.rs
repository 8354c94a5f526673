//! uC IR - AST node model
//!
//! This crate contains the tree that every later compiler phase reads:
//! - Positions for source locations
//! - The production context handed over by the parsing engine
//! - Terminal symbols (leaf nodes built from one token)
//! - Composite expression nodes and the `Expr` tagged union
//! - A visitor for read-only traversal
//!
//! # Design Philosophy
//!
//! - **Capture Once**: a node's position is recorded when the node is built,
//!   and never recomputed.
//! - **Immutable Nodes**: fields are private; there are constructors and
//!   accessors, no setters.
//! - **Owned Children**: `Box<Expr>` / `Vec<Expr>` give a strict tree, each
//!   child owned by exactly one parent.
//!
//! All node types derive Clone, Eq, Hash and Debug, so equality is structural.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod error;
mod expr;
mod position;
mod production;
mod terminal;
pub mod visitor;

pub use error::AstError;
pub use expr::{AccessExpr, AssignExpr, BinOp, CallExpr, Expr, UnOp};
pub use position::Position;
pub use production::{capture_position, symbol_text, Production, Reduction, DEFAULT_SYMBOL_INDEX};
pub use terminal::{
    Char, Ident, Int, LocatedTerminal, Operator, PositionCapture, Str, Terminal, TypeSpec,
};
pub use visitor::Visitor;
