//! Cross-kind comparator and structural equality.

use crate::value::{Number, Value};
use std::cmp::Ordering;

/// Orders two values.
///
/// Returns `None` when the operands have no relative order: different kinds,
/// lists, maps, nulls, or a NaN. Callers must propagate `None` as an unknown
/// result rather than treating it as "not less" or "not equal".
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::Text(x), Value::Text(y)) => Some(x.as_str().cmp(y.as_str())),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

pub fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Some(x.cmp(y)),
        _ => a.as_f64().partial_cmp(&b.as_f64()),
    }
}

/// Deep structural equality. Numbers are compared by value, so `1` and
/// `1.0` are equal; values of different kinds never are.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| equals(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            for (key, x) in xs {
                match ys.get(key) {
                    Some(y) if equals(x, y) => {}
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}
