//! Purpose: Contract coverage for the public greeter/calculator API.
//! Exports: Integration tests only.
//! Role: Verify the documented acceptance/rejection behavior end to end.
//! Invariants: Both functions are pure; repeated calls agree.
//! Invariants: Every rejection carries its documented error kind.

use sandcheck::api::{Error, ErrorKind, Op, calculate, calculate_expr, greet};
use serde_json::json;

fn kind_of(result: Result<impl std::fmt::Debug, Error>) -> ErrorKind {
    result.expect_err("expected rejection").kind()
}

#[test]
fn greeting_is_exact_concatenation() {
    for name in ["World", "Ada Lovelace", "  spaced  ", "Ünïcode"] {
        let expected = format!("Hello, {name}!");
        assert_eq!(greet(&json!(name)).unwrap(), expected);
    }
}

#[test]
fn greet_rejects_every_falsy_shape() {
    for value in [json!(""), json!(null), json!(false), json!(0)] {
        assert_eq!(kind_of(greet(&value)), ErrorKind::InvalidInput);
    }
}

#[test]
fn arithmetic_identities_hold() {
    let pairs = [(2.0, 3.0), (0.0, 0.0), (-1.5, 4.25), (1e10, -2.5)];
    for (a, b) in pairs {
        assert_eq!(calculate(&json!(a), &json!(b), Op::Add).unwrap(), a + b);
        assert_eq!(calculate(&json!(a), &json!(b), Op::Subtract).unwrap(), a - b);
        assert_eq!(calculate(&json!(a), &json!(b), Op::Multiply).unwrap(), a * b);
    }
}

#[test]
fn division_matches_expected_quotients() {
    assert_eq!(calculate(&json!(10), &json!(2), Op::Divide).unwrap(), 5.0);
    assert_eq!(calculate(&json!(7), &json!(2), Op::Divide).unwrap(), 3.5);
}

#[test]
fn any_zero_divisor_is_rejected() {
    for a in [json!(5), json!(0), json!(-3.25), json!("42")] {
        assert_eq!(
            kind_of(calculate(&a, &json!(0), Op::Divide)),
            ErrorKind::DivisionByZero
        );
    }
}

#[test]
fn non_numeric_operands_are_rejected() {
    assert_eq!(
        kind_of(calculate_expr(&json!("abc"), &json!(2), None)),
        ErrorKind::InvalidNumbers
    );
    assert_eq!(
        kind_of(calculate_expr(&json!(2), &json!("def"), None)),
        ErrorKind::InvalidNumbers
    );
}

#[test]
fn unknown_operation_tokens_are_rejected() {
    assert_eq!(
        kind_of(calculate_expr(&json!(2), &json!(3), Some("power"))),
        ErrorKind::UnsupportedOperation
    );
}

#[test]
fn omitted_operation_defaults_to_add() {
    assert_eq!(calculate_expr(&json!(2), &json!(3), None).unwrap(), 5.0);
    assert_eq!(
        calculate_expr(&json!(2), &json!(3), None).unwrap(),
        calculate_expr(&json!(2), &json!(3), Some("add")).unwrap()
    );
}

#[test]
fn op_tokens_round_trip() {
    for token in ["add", "subtract", "multiply", "divide"] {
        assert_eq!(Op::parse(token).unwrap().as_str(), token);
    }
}

#[test]
fn repeated_calls_agree() {
    for _ in 0..3 {
        assert_eq!(greet(&json!("World")).unwrap(), "Hello, World!");
        assert_eq!(
            calculate(&json!(7), &json!(2), Op::Divide).unwrap(),
            3.5
        );
    }
}
