//! Purpose: Arithmetic over dynamically typed operands with a closed operation set.
//! Exports: `Op`, `calculate`, `calculate_expr`.
//! Role: Pure calculator core; all rejection paths are typed errors.
//! Invariants: Operands are coerced and validated before the operation token is inspected.
//! Invariants: Dispatch is exhaustive; unknown tokens never reach arithmetic.
use serde::Serialize;
use serde_json::Value;

use crate::core::coerce::coerce_number;
use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    pub fn parse(token: &str) -> Result<Self, Error> {
        match token {
            "add" => Ok(Op::Add),
            "subtract" => Ok(Op::Subtract),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            other => Err(Error::new(ErrorKind::UnsupportedOperation)
                .with_message("unsupported operation")
                .with_token(other)
                .with_hint("Supported operations: add, subtract, multiply, divide.")),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        }
    }
}

/// Apply `op` to coerced operands. IEEE-754 double semantics throughout.
pub fn calculate(a: &Value, b: &Value, op: Op) -> Result<f64, Error> {
    let lhs = coerce_number(a)?;
    let rhs = coerce_number(b)?;
    apply(lhs, rhs, op)
}

/// Token-shaped entry point: `operation` defaults to `add` when absent.
///
/// Operands are coerced before the token is parsed, so a bad operand wins
/// over a bad token when both are present.
pub fn calculate_expr(a: &Value, b: &Value, operation: Option<&str>) -> Result<f64, Error> {
    let lhs = coerce_number(a)?;
    let rhs = coerce_number(b)?;
    let op = operation.map(Op::parse).transpose()?.unwrap_or(Op::Add);
    apply(lhs, rhs, op)
}

fn apply(lhs: f64, rhs: f64, op: Op) -> Result<f64, Error> {
    match op {
        Op::Add => Ok(lhs + rhs),
        Op::Subtract => Ok(lhs - rhs),
        Op::Multiply => Ok(lhs * rhs),
        Op::Divide => {
            // Matches -0.0 as well: both zeros are rejected divisors.
            if rhs == 0.0 {
                return Err(Error::new(ErrorKind::DivisionByZero)
                    .with_message("division by zero is not allowed")
                    .with_hint("Use a non-zero divisor."));
            }
            Ok(lhs / rhs)
        }
    }
}
