//! Composite expression nodes.
//!
//! Each node is assembled by a single reduction action from children that
//! are already built, and is never modified afterward.

use std::fmt;

use super::Expr;
use crate::Operator;

/// Assignment: `item = value`.
///
/// `item` is not checked for addressability here.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignExpr {
    item: Box<Expr>,
    value: Box<Expr>,
}

impl AssignExpr {
    pub fn new(item: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        AssignExpr {
            item: Box::new(item.into()),
            value: Box::new(value.into()),
        }
    }

    /// Assignment target.
    pub fn item(&self) -> &Expr {
        &self.item
    }

    /// Assigned value.
    pub fn value(&self) -> &Expr {
        &self.value
    }
}

/// Function call: `item(args...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    item: Box<Expr>,
    args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(item: impl Into<Expr>, args: Vec<Expr>) -> Self {
        CallExpr {
            item: Box::new(item.into()),
            args,
        }
    }

    /// Callee.
    pub fn item(&self) -> &Expr {
        &self.item
    }

    /// Arguments, in source order.
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// Subscript: `item[at]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessExpr {
    item: Box<Expr>,
    at: Box<Expr>,
}

impl AccessExpr {
    pub fn new(item: impl Into<Expr>, at: impl Into<Expr>) -> Self {
        AccessExpr {
            item: Box::new(item.into()),
            at: Box::new(at.into()),
        }
    }

    /// Base expression.
    pub fn item(&self) -> &Expr {
        &self.item
    }

    /// Index expression.
    pub fn at(&self) -> &Expr {
        &self.at
    }
}

/// Unary operation: `op item`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UnOp {
    op: Operator,
    item: Box<Expr>,
}

impl UnOp {
    pub fn new(op: Operator, item: impl Into<Expr>) -> Self {
        UnOp {
            op,
            item: Box::new(item.into()),
        }
    }

    pub fn op(&self) -> &Operator {
        &self.op
    }

    pub fn item(&self) -> &Expr {
        &self.item
    }
}

/// Binary operation: `left op right`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BinOp {
    op: Operator,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl BinOp {
    pub fn new(op: Operator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        BinOp {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn op(&self) -> &Operator {
        &self.op
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

// Display renders `Name(field=value, ...)`, with leaves in their
// `SYMBOL::value` form.

impl fmt::Display for AssignExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignExpr(item={}, value={})", self.item, self.value)
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallExpr(item={}, args=[", self.item)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str("])")
    }
}

impl fmt::Display for AccessExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessExpr(item={}, at={})", self.item, self.at)
    }
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnOp(op={}, item={})", self.op, self.item)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinOp(op={}, left={}, right={})",
            self.op, self.left, self.right
        )
    }
}
