//! Core evaluation logic.

use crate::{
    Vec,
    evaluator::{EvalError, operators},
    expr::{BinaryOp, Expr},
};
use tracing::trace;

/// Work item for the explicit post-order traversal.
enum Frame<'arena> {
    /// A node whose operands have not been evaluated yet.
    Visit(&'arena Expr<'arena>),
    /// An operator whose two operands are on top of the value stack.
    Combine(BinaryOp),
}

/// Evaluator for arithmetic expression trees.
///
/// Traversal uses an explicit work stack instead of call-stack recursion,
/// so evaluation depth is bounded by heap memory rather than the machine
/// stack and arbitrarily deep trees reduce without overflowing.
pub(crate) struct Evaluator<'arena> {
    work: Vec<Frame<'arena>>,
    values: Vec<i64>,
}

impl<'arena> Evaluator<'arena> {
    pub(crate) fn new() -> Self {
        Self {
            work: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Reduce `expr` to a single value, post-order, left operand first.
    ///
    /// The first failure in traversal order is returned as-is; once a left
    /// subtree has failed, the corresponding right subtree is never visited.
    pub(crate) fn eval(&mut self, expr: &'arena Expr<'arena>) -> Result<i64, EvalError> {
        self.work.push(Frame::Visit(expr));

        while let Some(frame) = self.work.pop() {
            match frame {
                Frame::Visit(expr) => match *expr {
                    Expr::Number(value) => self.values.push(value),
                    Expr::Binary { op, left, right } => {
                        // Left is pushed last so it is visited first; a
                        // failure there returns before `right` is reached.
                        self.work.push(Frame::Combine(op));
                        self.work.push(Frame::Visit(right));
                        self.work.push(Frame::Visit(left));
                    }
                },
                Frame::Combine(op) => {
                    // Right was evaluated second, so it is on top.
                    let right = self.values.pop().expect("operand missing - internal error");
                    let left = self.values.pop().expect("operand missing - internal error");
                    let combined = operators::eval_binary_int(op, left, right).map_err(|error| {
                        trace!(%error, "evaluation failed");
                        error
                    })?;
                    self.values.push(combined);
                }
            }
        }

        let result = self
            .values
            .pop()
            .expect("value stack empty - internal error");
        debug_assert!(self.values.is_empty(), "value stack not fully consumed");
        trace!(result, "evaluation finished");
        Ok(result)
    }
}
