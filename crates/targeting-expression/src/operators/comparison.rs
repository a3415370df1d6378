//! Equality and ordering operators.

use crate::compare;
use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operator, OperatorDefinition};
use crate::value::Value;
use std::cmp::Ordering;

/// Applies the comparator and maps the ordering through `accept`. Operands
/// without a relative order give `Null`.
fn ordering(lhs: &Value, rhs: &Value, accept: fn(Ordering) -> bool) -> Value {
    match compare::compare(lhs, rhs) {
        Some(ord) => Value::Bool(accept(ord)),
        None => Value::Null,
    }
}

fn eq_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(Value::Bool(compare::equals(&lhs, &rhs)))
}

fn ne_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(Value::Bool(!compare::equals(&lhs, &rhs)))
}

fn lt_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(ordering(&lhs, &rhs, Ordering::is_lt))
}

fn lte_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(ordering(&lhs, &rhs, Ordering::is_le))
}

fn gt_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(ordering(&lhs, &rhs, Ordering::is_gt))
}

fn gte_eval(_: &mut EvalCtx<'_>, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    Ok(ordering(&lhs, &rhs, Ordering::is_ge))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "eq",
            aliases: &["=="],
            arity: Arity::Fixed(2),
            call: Operator::Binary(eq_eval),
        },
        OperatorDefinition {
            name: "ne",
            aliases: &["!="],
            arity: Arity::Fixed(2),
            call: Operator::Binary(ne_eval),
        },
        OperatorDefinition {
            name: "lt",
            aliases: &["<"],
            arity: Arity::Fixed(2),
            call: Operator::Binary(lt_eval),
        },
        OperatorDefinition {
            name: "lte",
            aliases: &["<="],
            arity: Arity::Fixed(2),
            call: Operator::Binary(lte_eval),
        },
        OperatorDefinition {
            name: "gt",
            aliases: &[">"],
            arity: Arity::Fixed(2),
            call: Operator::Binary(gt_eval),
        },
        OperatorDefinition {
            name: "gte",
            aliases: &[">="],
            arity: Arity::Fixed(2),
            call: Operator::Binary(gte_eval),
        },
    ]
}
