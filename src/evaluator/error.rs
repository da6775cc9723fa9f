//! Runtime evaluation errors.
//!
//! These are the only ways evaluation can fail. Both variants carry the
//! already-resolved operand values of the node that failed, so a caller can
//! report exactly which sub-operation went wrong. Failures are detected at
//! the smallest failing subtree and propagated unchanged to the caller; no
//! enclosing node recovers from or rewrites a child's failure.

use crate::expr::BinaryOp;
use core::fmt;

/// Runtime evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    ///
    /// `lhs` is the resolved left operand; the operator is necessarily
    /// division and the right operand necessarily zero.
    DivisionByZero { lhs: i64 },

    /// An arithmetic combination exceeded the `i64` range.
    ///
    /// Carries the operator and both resolved operands. `i64::MIN / -1`
    /// is reported here, not as a division error.
    Overflow { op: BinaryOp, lhs: i64, rhs: i64 },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero { lhs } => {
                write!(f, "Division by zero: {} / 0", lhs)
            }
            EvalError::Overflow { op, lhs, rhs } => {
                write!(f, "Integer overflow: {} {} {}", lhs, op, rhs)
            }
        }
    }
}

impl core::error::Error for EvalError {}
