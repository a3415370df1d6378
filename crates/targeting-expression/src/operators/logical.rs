//! Three-valued logical operators.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::expr::Expr;
use crate::truth::Truth;
use crate::types::{Arity, Operator, OperatorDefinition};
use crate::value::Value;

/// Evaluates operands left to right until one equals `decisive`. If none
/// does, the result is unknown when any operand was, else `!decisive`.
/// No operands at all is the vacuous case: `and` is true, `or` is false.
fn short_circuit(
    ctx: &mut EvalCtx<'_>,
    operands: &[Expr],
    decisive: Truth,
) -> Result<Value, EvalError> {
    let mut unknown = false;
    for operand in operands {
        let value = ctx.evaluate(operand)?;
        match Truth::from_value(&value) {
            t if t == decisive => return Ok(t.into()),
            Truth::Unknown => unknown = true,
            _ => {}
        }
    }
    if unknown {
        Ok(Value::Null)
    } else {
        Ok((!decisive).into())
    }
}

fn and_eval(ctx: &mut EvalCtx<'_>, operands: &[Expr]) -> Result<Value, EvalError> {
    short_circuit(ctx, operands, Truth::False)
}

fn or_eval(ctx: &mut EvalCtx<'_>, operands: &[Expr]) -> Result<Value, EvalError> {
    short_circuit(ctx, operands, Truth::True)
}

fn not_eval(operand: Value) -> Result<Value, EvalError> {
    Ok((!Truth::from_value(&operand)).into())
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "and",
            aliases: &["&&"],
            arity: Arity::AtLeast(0),
            call: Operator::Lazy(and_eval),
        },
        OperatorDefinition {
            name: "or",
            aliases: &["||"],
            arity: Arity::AtLeast(0),
            call: Operator::Lazy(or_eval),
        },
        OperatorDefinition {
            name: "not",
            aliases: &["!"],
            arity: Arity::Fixed(1),
            call: Operator::Unary(not_eval),
        },
    ]
}
