//! JSON wire format → [`Expr`].
//!
//! - `{"var": "a/b"}` or `{"var": {"path": "a/b"}}` is a variable reference.
//! - `{"value": x}` is the literal `x`, taken verbatim.
//! - `{"op": [a, b, ...]}` is an operator call.
//! - Everything else (scalars, arrays, objects with zero or several keys,
//!   single-key objects whose value is not an array) is a literal.

use crate::compile::EvaluatorOptions;
use crate::error::EvalError;
use crate::expr::Expr;
use crate::value::Value;
use serde_json::Value as Json;

/// Parses an expression with the default nesting limit.
pub fn parse(json: &Json) -> Result<Expr, EvalError> {
    parse_with_limit(json, EvaluatorOptions::DEFAULT_MAX_DEPTH)
}

/// Parses an expression, failing with [`EvalError::ExpressionTooDeep`] once
/// operator nodes nest deeper than `max_depth`.
pub fn parse_with_limit(json: &Json, max_depth: usize) -> Result<Expr, EvalError> {
    parse_node(json, 0, max_depth)
}

/// Parses expression text.
pub fn parse_str(text: &str) -> Result<Expr, EvalError> {
    let json: Json =
        serde_json::from_str(text).map_err(|e| EvalError::InvalidJson(e.to_string()))?;
    parse(&json)
}

fn parse_node(json: &Json, depth: usize, max_depth: usize) -> Result<Expr, EvalError> {
    let obj = match json {
        Json::Object(obj) if obj.len() == 1 => obj,
        other => return Ok(Expr::Literal(Value::from(other))),
    };
    let Some((key, arg)) = obj.iter().next() else {
        return Ok(Expr::Literal(Value::from(json)));
    };
    match (key.as_str(), arg) {
        ("var", _) => parse_var(arg).map(Expr::Var),
        ("value", _) => Ok(Expr::Literal(Value::from(arg))),
        (operator, Json::Array(items)) => {
            if depth >= max_depth {
                return Err(EvalError::ExpressionTooDeep { limit: max_depth });
            }
            let operands = items
                .iter()
                .map(|item| parse_node(item, depth + 1, max_depth))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Call {
                operator: operator.to_string(),
                operands,
            })
        }
        _ => Ok(Expr::Literal(Value::from(json))),
    }
}

fn parse_var(arg: &Json) -> Result<String, EvalError> {
    match arg {
        Json::String(path) => Ok(path.clone()),
        Json::Object(obj) => match obj.get("path") {
            Some(Json::String(path)) => Ok(path.clone()),
            _ => Err(EvalError::MalformedExpression(format!(
                "\"var\" expects a path string, got {}",
                arg
            ))),
        },
        other => Err(EvalError::MalformedExpression(format!(
            "\"var\" expects a path string, got {}",
            other
        ))),
    }
}
