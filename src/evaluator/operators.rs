//! Binary operator implementations.

use crate::{evaluator::EvalError, expr::BinaryOp};

/// Evaluate a binary operation on two integers.
///
/// All arithmetic is checked: any result outside the `i64` range is
/// reported as [`EvalError::Overflow`], uniformly for every operator.
/// Division truncates toward zero; a zero divisor is reported as
/// [`EvalError::DivisionByZero`], and `i64::MIN / -1` as overflow.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalError> {
    let overflow = || EvalError::Overflow {
        op,
        lhs: left,
        rhs: right,
    };
    match op {
        BinaryOp::Add => left.checked_add(right).ok_or_else(overflow),
        BinaryOp::Sub => left.checked_sub(right).ok_or_else(overflow),
        BinaryOp::Mul => left.checked_mul(right).ok_or_else(overflow),
        BinaryOp::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero { lhs: left })
            } else {
                left.checked_div(right).ok_or_else(overflow)
            }
        }
    }
}
