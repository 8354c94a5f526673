//! Expressions.
//!
//! `Expr` is a closed tagged union over every node kind, terminal and
//! composite. Later phases dispatch on it with `match` (or through
//! [`crate::visitor::Visitor`]), so adding a node kind is a compile error
//! everywhere it is not yet handled.
//!
//! Children are owned: each composite holds its sub-expressions directly,
//! giving a strict tree with one owner per node.

mod nodes;

use std::fmt;

use crate::visitor::Visitor;
use crate::{Char, Ident, Int, LocatedTerminal, Operator, Position, Str, Terminal, TypeSpec};

pub use nodes::{AccessExpr, AssignExpr, BinOp, CallExpr, UnOp};

/// Any AST expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    // Composites
    Assign(AssignExpr),
    Call(CallExpr),
    Access(AccessExpr),
    Unary(UnOp),
    Binary(BinOp),

    // Terminals
    TypeSpec(TypeSpec),
    Int(Int),
    Char(Char),
    Ident(Ident),
    Str(Str),
    Operator(Operator),
}

impl Expr {
    /// Variant tag, as used in traces and diagnostics.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Expr::Assign(_) => "AssignExpr",
            Expr::Call(_) => "CallExpr",
            Expr::Access(_) => "AccessExpr",
            Expr::Unary(_) => "UnOp",
            Expr::Binary(_) => "BinOp",
            Expr::TypeSpec(_) => TypeSpec::SYMBOL,
            Expr::Int(_) => Int::SYMBOL,
            Expr::Char(_) => Char::SYMBOL,
            Expr::Ident(_) => Ident::SYMBOL,
            Expr::Str(_) => Str::SYMBOL,
            Expr::Operator(_) => Operator::SYMBOL,
        }
    }

    /// Returns true for leaf nodes.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Expr::TypeSpec(_)
                | Expr::Int(_)
                | Expr::Char(_)
                | Expr::Ident(_)
                | Expr::Str(_)
                | Expr::Operator(_)
        )
    }

    /// Leftmost position recorded anywhere in this subtree.
    ///
    /// Composites store no position of their own; this reads the positions
    /// their leaves captured. `None` when no leaf recorded one (for example
    /// a bare `TypeSpec`).
    pub fn position(&self) -> Option<Position> {
        let mut finder = LeftmostPosition::default();
        finder.visit_expr(self);
        finder.found
    }
}

/// Collects the minimum recorded position of a subtree.
#[derive(Default)]
struct LeftmostPosition {
    found: Option<Position>,
}

impl LeftmostPosition {
    fn record(&mut self, position: Position) {
        self.found = Some(self.found.map_or(position, |p| p.min(position)));
    }
}

impl<'ast> Visitor<'ast> for LeftmostPosition {
    fn visit_int(&mut self, int: &'ast Int) {
        self.record(int.position());
    }

    fn visit_char(&mut self, c: &'ast Char) {
        self.record(c.position());
    }

    fn visit_ident(&mut self, ident: &'ast Ident) {
        self.record(ident.position());
    }

    fn visit_str(&mut self, s: &'ast Str) {
        self.record(s.position());
    }

    fn visit_operator(&mut self, op: &'ast Operator) {
        if let Some(p) = op.position() {
            self.record(p);
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(node: $ty) -> Self {
                    Expr::$variant(node)
                }
            }
        )+
    };
}

impl_from_node!(
    Assign(AssignExpr),
    Call(CallExpr),
    Access(AccessExpr),
    Unary(UnOp),
    Binary(BinOp),
    TypeSpec(TypeSpec),
    Int(Int),
    Char(Char),
    Ident(Ident),
    Str(Str),
    Operator(Operator),
);

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node: &dyn fmt::Display = match self {
            Expr::Assign(node) => node,
            Expr::Call(node) => node,
            Expr::Access(node) => node,
            Expr::Unary(node) => node,
            Expr::Binary(node) => node,
            Expr::TypeSpec(leaf) => leaf,
            Expr::Int(leaf) => leaf,
            Expr::Char(leaf) => leaf,
            Expr::Ident(leaf) => leaf,
            Expr::Str(leaf) => leaf,
            Expr::Operator(leaf) => leaf,
        };
        fmt::Display::fmt(node, f)
    }
}
