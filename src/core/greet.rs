// Greeting formatting. Falsy names (null, false, empty string, numeric
// zero) are rejected; everything else is substituted verbatim.
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};

pub fn greet(name: &Value) -> Result<String, Error> {
    if is_falsy(name) {
        return Err(Error::new(ErrorKind::InvalidInput)
            .with_message("name is required")
            .with_hint("Provide a non-empty name."));
    }
    Ok(format!("Hello, {}!", display_name(name)))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn display_name(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::greet;
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn greets_by_name() {
        assert_eq!(greet(&json!("World")).unwrap(), "Hello, World!");
    }

    #[test]
    fn substitutes_verbatim_without_trimming() {
        assert_eq!(greet(&json!("  Ada  ")).unwrap(), "Hello,   Ada  !");
    }

    #[test]
    fn renders_non_string_names() {
        assert_eq!(greet(&json!(42)).unwrap(), "Hello, 42!");
        assert_eq!(greet(&json!(true)).unwrap(), "Hello, true!");
        assert_eq!(greet(&json!([1, 2])).unwrap(), "Hello, [1,2]!");
    }

    #[test]
    fn rejects_falsy_names() {
        for value in [json!(""), json!(null), json!(false), json!(0), json!(0.0)] {
            let err = greet(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }
}
