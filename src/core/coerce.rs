//! Purpose: Coerce dynamic operand values into `f64` for the calculator.
//! Exports: `coerce_number`, `parse_number_prefix`.
//! Role: Explicit parsing boundary; rejection is an error, never a NaN sentinel.
//! Invariants: Leading-numeric-prefix semantics: trailing garbage is ignored.
//! Invariants: A value that consumes no digits (and is not `Infinity`) is rejected.
use serde_json::Value;
use std::str::FromStr;

use crate::core::error::{Error, ErrorKind};

/// Coerce a dynamic value to a finite-or-infinite `f64`.
///
/// Numbers pass through unchanged. Strings are parsed by
/// [`parse_number_prefix`]. Every other shape (null, booleans, arrays,
/// objects) has no numeric prefix and is rejected.
pub fn coerce_number(value: &Value) -> Result<f64, Error> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number_prefix(text),
        _ => None,
    };
    parsed.ok_or_else(|| {
        Error::new(ErrorKind::InvalidNumbers)
            .with_message("invalid numbers provided")
            .with_token(render_token(value))
    })
}

/// Parse the leading numeric prefix of `input`.
///
/// Accepts optional leading whitespace, an optional sign, then either the
/// literal `Infinity` or digits with an optional fraction and an optional
/// well-formed exponent. Returns `None` when no digits are consumed.
/// Examples: `"3.5x"` → 3.5, `"  42 "` → 42, `"0x10"` → 0, `"abc"` → `None`.
pub fn parse_number_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    if trimmed[pos..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = consume_digits(bytes, &mut pos);
    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        frac_digits = consume_digits(bytes, &mut pos);
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mut end = pos;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        // An exponent marker without digits is trailing garbage, not an exponent.
        if consume_digits(bytes, &mut exp_pos) > 0 {
            end = exp_pos;
        }
    }

    f64::from_str(&trimmed[..end]).ok()
}

fn consume_digits(bytes: &[u8], pos: &mut usize) -> usize {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    *pos - start
}

fn render_token(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
