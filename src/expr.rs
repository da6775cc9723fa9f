//! Arena-allocated arithmetic expression trees.
//!
//! An [`Expr`] is either a literal integer or a binary node whose operands
//! are references into the same arena. Children must exist before their
//! parent can be built, so trees are acyclic by construction, and nothing
//! mutates a node after it is allocated.

use bumpalo::Bump;
use core::fmt;

/// Binary operator carried by an [`Expr::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The operator's infix symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of an arithmetic expression tree.
///
/// Equality is structural. Nodes are `Copy` (a copy is shallow: child
/// references still point into the original arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr<'arena> {
    /// A literal operand.
    Number(i64),

    /// An operator applied to two subtrees.
    Binary {
        op: BinaryOp,
        left: &'arena Expr<'arena>,
        right: &'arena Expr<'arena>,
    },
}

impl<'arena> Expr<'arena> {
    /// Allocate a literal node.
    pub fn number(arena: &'arena Bump, value: i64) -> &'arena Self {
        arena.alloc(Expr::Number(value))
    }

    /// Allocate a binary node combining `left` and `right` with `op`.
    pub fn binary(
        arena: &'arena Bump,
        op: BinaryOp,
        left: &'arena Self,
        right: &'arena Self,
    ) -> &'arena Self {
        arena.alloc(Expr::Binary { op, left, right })
    }

    /// Allocate an addition node.
    pub fn add(arena: &'arena Bump, left: &'arena Self, right: &'arena Self) -> &'arena Self {
        Self::binary(arena, BinaryOp::Add, left, right)
    }

    /// Allocate a subtraction node (`left - right`).
    pub fn sub(arena: &'arena Bump, left: &'arena Self, right: &'arena Self) -> &'arena Self {
        Self::binary(arena, BinaryOp::Sub, left, right)
    }

    /// Allocate a multiplication node.
    pub fn mul(arena: &'arena Bump, left: &'arena Self, right: &'arena Self) -> &'arena Self {
        Self::binary(arena, BinaryOp::Mul, left, right)
    }

    /// Allocate a division node (`left / right`, truncating toward zero).
    pub fn div(arena: &'arena Bump, left: &'arena Self, right: &'arena Self) -> &'arena Self {
        Self::binary(arena, BinaryOp::Div, left, right)
    }
}

impl fmt::Display for Expr<'_> {
    /// Fully parenthesized infix rendering, e.g. `(1 + (2 * 3))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
