//! Three-valued logic.

use crate::value::Value;
use std::ops::Not;

/// A boolean extended with an unknown state, which is what `Null` means to
/// the logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    /// Converts an operand to a truth value.
    ///
    /// `Null` is unknown. Numbers are true when non-zero, text is false for
    /// `""`, `"0"` and `"false"`, and lists and maps are always true.
    pub fn from_value(value: &Value) -> Truth {
        let b = match value {
            Value::Null => return Truth::Unknown,
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_zero() && !n.as_f64().is_nan(),
            Value::Text(s) => !matches!(s.as_str(), "" | "0" | "false"),
            Value::List(_) | Value::Map(_) => true,
        };
        Truth::from(b)
    }

    /// Collapses unknown to `false`, for callers that need a decision.
    pub fn is_true(self) -> bool {
        self == Truth::True
    }
}

impl Not for Truth {
    type Output = Truth;

    fn not(self) -> Truth {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }
}

impl From<Truth> for Value {
    fn from(t: Truth) -> Self {
        match t {
            Truth::True => Value::Bool(true),
            Truth::False => Value::Bool(false),
            Truth::Unknown => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let cases = [
            (json!(null), Truth::Unknown),
            (json!(true), Truth::True),
            (json!(false), Truth::False),
            (json!(0), Truth::False),
            (json!(0.0), Truth::False),
            (json!(-2), Truth::True),
            (json!(""), Truth::False),
            (json!("0"), Truth::False),
            (json!("false"), Truth::False),
            (json!("no"), Truth::True),
            (json!([]), Truth::True),
            (json!({}), Truth::True),
        ];
        for (input, expected) in cases {
            assert_eq!(Truth::from_value(&Value::from(input.clone())), expected, "{}", input);
        }
    }

    #[test]
    fn test_not_keeps_unknown() {
        assert_eq!(!Truth::Unknown, Truth::Unknown);
        assert_eq!(!Truth::True, Truth::False);
        assert_eq!(!!Truth::False, Truth::False);
    }

    #[test]
    fn test_into_value() {
        assert!(Value::from(Truth::Unknown).is_null());
        assert_eq!(Value::from(Truth::True), Value::Bool(true));
    }
}
