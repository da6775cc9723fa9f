//! Tree-walking evaluator for arithmetic expression trees.
//!
//! The evaluator reduces an [`Expr`] to an `i64`, or reports a typed
//! [`EvalError`] describing exactly which sub-operation failed.
//!
//! ## Design Principles
//!
//! - **Never panic**: every structurally valid tree evaluates to `Ok` or a
//!   typed `Err`; division by zero is an error value, not a crash.
//! - **Stack-safe**: traversal runs on an explicit work stack, so deeply
//!   nested trees cannot overflow the machine stack.
//! - **Pure**: no side effects and no state between calls; the same tree
//!   always produces the same outcome.
//!
//! Reduction is post-order and left-to-right: both operands are fully
//! resolved before their parent combines them, the left one first. The
//! first failing subtree in that order is the one reported, and the right
//! sibling of a failed subtree is never evaluated.
//!
//! ## Example
//!
//! ```
//! use abacus::{evaluator, expr::Expr};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let five = Expr::number(&arena, 5);
//! let two = Expr::number(&arena, 2);
//! let expr = Expr::add(&arena, Expr::sub(&arena, five, two), Expr::number(&arena, 10));
//!
//! assert_eq!(evaluator::eval(expr), Ok(13));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;

use crate::expr::Expr;

/// Evaluate an expression tree.
///
/// ## Arguments
///
/// - `expr`: root of the tree to reduce. It is only read; the caller keeps
///   ownership and may evaluate the same tree again (or from several
///   threads at once) and get the identical outcome.
///
/// ## Returns
///
/// The resulting value, or the first [`EvalError`] encountered in
/// left-to-right post-order.
///
/// ## Example
///
/// ```
/// use abacus::{evaluator::{EvalError, eval}, expr::Expr};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let expr = Expr::div(&arena, Expr::number(&arena, 10), Expr::number(&arena, 0));
/// assert_eq!(eval(expr), Err(EvalError::DivisionByZero { lhs: 10 }));
/// ```
pub fn eval(expr: &Expr<'_>) -> Result<i64, EvalError> {
    eval::Evaluator::new().eval(expr)
}
