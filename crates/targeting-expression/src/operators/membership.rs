//! Membership and null tests.

use crate::compare;
use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operator, OperatorDefinition};
use crate::value::Value;

/// `needle` in a list (by structural equality) or among a map's keys.
/// Any other haystack gives `Null`.
fn in_eval(_: &mut EvalCtx<'_>, needle: Value, haystack: Value) -> Result<Value, EvalError> {
    let found = match &haystack {
        Value::List(items) => items.iter().any(|item| compare::equals(item, &needle)),
        Value::Map(map) => match &needle {
            Value::Text(key) => map.contains_key(key),
            _ => false,
        },
        _ => return Ok(Value::Null),
    };
    Ok(Value::Bool(found))
}

fn null_eval(operand: Value) -> Result<Value, EvalError> {
    Ok(Value::Bool(operand.is_null()))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "in",
            aliases: &[],
            arity: Arity::Fixed(2),
            call: Operator::Binary(in_eval),
        },
        OperatorDefinition {
            name: "null",
            aliases: &["nil?"],
            arity: Arity::Fixed(1),
            call: Operator::Unary(null_eval),
        },
    ]
}
