//! The recursive tree walk.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::expr::Expr;
use crate::types::{assert_arity, Operator};
use crate::value::Value;
use crate::vars;

/// Evaluates an expression node within an evaluation context.
///
/// - Literals evaluate to themselves.
/// - Variables resolve through the context; unset ones are `Null`.
/// - Calls resolve their operator, check its arity and dispatch. Operands are
///   evaluated depth-first, left to right, except for lazy operators which
///   receive the operand nodes unevaluated.
pub fn evaluate(expr: &Expr, ctx: &mut EvalCtx<'_>) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Var(path) => Ok(vars::extract(ctx.vars, path)),
        Expr::Call { operator, operands } => {
            ctx.enter()?;
            let result = call(operator, operands, ctx);
            ctx.leave();
            result
        }
    }
}

fn call(operator: &str, operands: &[Expr], ctx: &mut EvalCtx<'_>) -> Result<Value, EvalError> {
    let def = ctx.operators.resolve(operator)?;
    assert_arity(operator, &def.arity, operands.len())?;
    let call = def.call;

    let result = match call {
        Operator::Lazy(f) => f(ctx, operands)?,
        Operator::Unary(f) => {
            let [operand] = operands else {
                return Err(EvalError::MalformedExpression(format!(
                    "\"{}\" is unary but declares {} operands",
                    operator,
                    operands.len()
                )));
            };
            f(evaluate(operand, ctx)?)?
        }
        Operator::Binary(f) => {
            let [lhs, rhs] = operands else {
                return Err(EvalError::MalformedExpression(format!(
                    "\"{}\" is binary but declares {} operands",
                    operator,
                    operands.len()
                )));
            };
            let lhs = evaluate(lhs, ctx)?;
            let rhs = evaluate(rhs, ctx)?;
            f(ctx, lhs, rhs)?
        }
        Operator::Variadic(f) => {
            let values = operands
                .iter()
                .map(|operand| evaluate(operand, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            f(ctx, values)?
        }
    };
    tracing::trace!(operator, depth = ctx.depth(), result = %result, "evaluated");
    Ok(result)
}
