//! Integration tests driving the public API end to end.

use abacus::evaluator::{EvalError, eval};
use abacus::expr::{BinaryOp, Expr};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

#[test]
fn literal_evaluates_to_itself() {
    let arena = Bump::new();
    assert_eq!(eval(Expr::number(&arena, 5)), Ok(5));
}

#[test]
fn subtraction() {
    let arena = Bump::new();
    let expr = Expr::sub(&arena, Expr::number(&arena, 5), Expr::number(&arena, 2));
    assert_eq!(eval(expr), Ok(3));
}

#[test]
fn nested_arithmetic() {
    let arena = Bump::new();
    // (5 - 2) + 10
    let expr = Expr::add(
        &arena,
        Expr::sub(&arena, Expr::number(&arena, 5), Expr::number(&arena, 2)),
        Expr::number(&arena, 10),
    );
    assert_eq!(eval(expr), Ok(13));

    // 3 * (2 + 2)
    let expr = Expr::mul(
        &arena,
        Expr::number(&arena, 3),
        Expr::add(&arena, Expr::number(&arena, 2), Expr::number(&arena, 2)),
    );
    assert_eq!(eval(expr), Ok(12));
}

#[test]
fn division_by_zero_is_an_error_not_a_crash() {
    let arena = Bump::new();
    let expr = Expr::div(&arena, Expr::number(&arena, 10), Expr::number(&arena, 0));
    assert_eq!(eval(expr), Err(EvalError::DivisionByZero { lhs: 10 }));
}

#[test]
fn generic_builder_matches_named_builders() {
    let arena = Bump::new();
    let a = Expr::number(&arena, 8);
    let b = Expr::number(&arena, 2);
    assert_eq!(
        Expr::binary(&arena, BinaryOp::Div, a, b),
        Expr::div(&arena, a, b)
    );
    assert_eq!(eval(Expr::binary(&arena, BinaryOp::Div, a, b)), Ok(4));
}

#[test]
fn overflow_is_reported_with_context() {
    let arena = Bump::new();
    let expr = Expr::add(
        &arena,
        Expr::number(&arena, i64::MAX),
        Expr::number(&arena, 1),
    );
    let err = eval(expr).unwrap_err();
    assert_eq!(
        err,
        EvalError::Overflow {
            op: BinaryOp::Add,
            lhs: i64::MAX,
            rhs: 1
        }
    );
    assert_eq!(err.to_string(), format!("Integer overflow: {} + 1", i64::MAX));
}

#[test]
fn trees_render_as_parenthesized_infix() {
    let arena = Bump::new();
    let expr = Expr::add(
        &arena,
        Expr::number(&arena, 1),
        Expr::mul(&arena, Expr::number(&arena, 2), Expr::number(&arena, 3)),
    );
    assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    assert_eq!(eval(expr), Ok(7));
}

#[test]
fn one_tree_can_be_evaluated_from_many_threads() {
    let arena = Bump::new();
    let expr = Expr::mul(
        &arena,
        Expr::add(&arena, Expr::number(&arena, 2), Expr::number(&arena, 2)),
        Expr::number(&arena, 10),
    );

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| eval(expr))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(40));
        }
    });
}

#[test]
fn eval_errors_are_std_errors() {
    let arena = Bump::new();
    let expr = Expr::div(&arena, Expr::number(&arena, 1), Expr::number(&arena, 0));
    let err: Box<dyn std::error::Error> = Box::new(eval(expr).unwrap_err());
    assert_eq!(err.to_string(), "Division by zero: 1 / 0");
}
