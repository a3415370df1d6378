//! Regular expression matching.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operator, OperatorDefinition};
use crate::value::Value;
use regex::Regex;

/// Whether `subject` contains a match of `pattern`. A pattern that fails to
/// compile, or a non-text operand, gives `Null`.
fn match_eval(_: &mut EvalCtx<'_>, subject: Value, pattern: Value) -> Result<Value, EvalError> {
    let (Value::Text(subject), Value::Text(pattern)) = (&subject, &pattern) else {
        return Ok(Value::Null);
    };
    match Regex::new(pattern) {
        Ok(re) => Ok(Value::Bool(re.is_match(subject))),
        Err(err) => {
            tracing::warn!(pattern = %pattern, error = %err, "invalid match pattern");
            Ok(Value::Null)
        }
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![OperatorDefinition {
        name: "match",
        aliases: &[],
        arity: Arity::Fixed(2),
        call: Operator::Binary(match_eval),
    }]
}
