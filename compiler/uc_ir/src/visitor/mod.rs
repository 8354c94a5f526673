//! AST Visitor Pattern
//!
//! Provides read-only traversal of an expression tree.
//!
//! # Design
//!
//! A single `Visitor` trait is provided. The visitor can mutate its own
//! state during traversal, but the tree remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children
//! in source order. Override `visit_*` methods to add behavior at specific
//! nodes, and call the matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountIdents {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountIdents {
//!     fn visit_ident(&mut self, _ident: &'ast Ident) {
//!         self.count += 1;
//!     }
//! }
//! ```

use crate::{
    AccessExpr, AssignExpr, BinOp, CallExpr, Char, Expr, Ident, Int, Operator, Str, TypeSpec,
    UnOp,
};

/// AST Visitor trait.
///
/// Leaf hooks do nothing by default; composite hooks walk their children.
pub trait Visitor<'ast> {
    /// Visit any expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_assign(&mut self, node: &'ast AssignExpr) {
        walk_assign(self, node);
    }

    fn visit_call(&mut self, node: &'ast CallExpr) {
        walk_call(self, node);
    }

    fn visit_access(&mut self, node: &'ast AccessExpr) {
        walk_access(self, node);
    }

    fn visit_unary(&mut self, node: &'ast UnOp) {
        walk_unary(self, node);
    }

    fn visit_binary(&mut self, node: &'ast BinOp) {
        walk_binary(self, node);
    }

    fn visit_type_spec(&mut self, _spec: TypeSpec) {}

    fn visit_int(&mut self, _int: &'ast Int) {}

    fn visit_char(&mut self, _c: &'ast Char) {}

    fn visit_ident(&mut self, _ident: &'ast Ident) {}

    fn visit_str(&mut self, _s: &'ast Str) {}

    fn visit_operator(&mut self, _op: &'ast Operator) {}
}

/// Dispatch an expression to its variant hook.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match expr {
        Expr::Assign(node) => visitor.visit_assign(node),
        Expr::Call(node) => visitor.visit_call(node),
        Expr::Access(node) => visitor.visit_access(node),
        Expr::Unary(node) => visitor.visit_unary(node),
        Expr::Binary(node) => visitor.visit_binary(node),
        Expr::TypeSpec(spec) => visitor.visit_type_spec(*spec),
        Expr::Int(int) => visitor.visit_int(int),
        Expr::Char(c) => visitor.visit_char(c),
        Expr::Ident(ident) => visitor.visit_ident(ident),
        Expr::Str(s) => visitor.visit_str(s),
        Expr::Operator(op) => visitor.visit_operator(op),
    }
}

/// Target, then value.
pub fn walk_assign<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast AssignExpr) {
    visitor.visit_expr(node.item());
    visitor.visit_expr(node.value());
}

/// Callee, then each argument in order.
pub fn walk_call<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast CallExpr) {
    visitor.visit_expr(node.item());
    for arg in node.args() {
        visitor.visit_expr(arg);
    }
}

/// Base, then index.
pub fn walk_access<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast AccessExpr) {
    visitor.visit_expr(node.item());
    visitor.visit_expr(node.at());
}

/// Operator, then operand.
pub fn walk_unary<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast UnOp) {
    visitor.visit_operator(node.op());
    visitor.visit_expr(node.item());
}

/// Left operand, operator, right operand.
pub fn walk_binary<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast BinOp) {
    visitor.visit_expr(node.left());
    visitor.visit_operator(node.op());
    visitor.visit_expr(node.right());
}
