//! Arithmetic over numbers. Any non-number operand, or a division by zero,
//! makes the result `Null`.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operator, OperatorDefinition};
use crate::value::{Number, Value};

type IntOp = fn(i64, i64) -> Option<i64>;
type FloatOp = fn(f64, f64) -> f64;

fn fold(values: &[Value], int_op: IntOp, float_op: FloatOp) -> Value {
    let mut numbers = values.iter().map(Value::as_number);
    let Some(Some(mut acc)) = numbers.next() else {
        return Value::Null;
    };
    for n in numbers {
        let Some(n) = n else {
            return Value::Null;
        };
        acc = match (acc, n) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(r) => Number::Int(r),
                None => Number::Float(float_op(a as f64, b as f64)),
            },
            (a, b) => Number::Float(float_op(a.as_f64(), b.as_f64())),
        };
    }
    Value::Number(acc)
}

fn add_eval(_: &mut EvalCtx<'_>, values: Vec<Value>) -> Result<Value, EvalError> {
    Ok(fold(&values, i64::checked_add, |a, b| a + b))
}

fn sub_eval(_: &mut EvalCtx<'_>, values: Vec<Value>) -> Result<Value, EvalError> {
    Ok(fold(&values, i64::checked_sub, |a, b| a - b))
}

fn mul_eval(_: &mut EvalCtx<'_>, values: Vec<Value>) -> Result<Value, EvalError> {
    Ok(fold(&values, i64::checked_mul, |a, b| a * b))
}

fn div_eval(_: &mut EvalCtx<'_>, values: Vec<Value>) -> Result<Value, EvalError> {
    if values
        .iter()
        .skip(1)
        .any(|v| v.as_number().is_some_and(|n| n.is_zero()))
    {
        return Ok(Value::Null);
    }
    // Integer division only when it is exact; otherwise continue in floats.
    Ok(fold(
        &values,
        |a: i64, b: i64| match a.checked_rem(b) {
            Some(0) => a.checked_div(b),
            _ => None,
        },
        |a, b| a / b,
    ))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "add",
            aliases: &["+"],
            arity: Arity::AtLeast(2),
            call: Operator::Variadic(add_eval),
        },
        OperatorDefinition {
            name: "sub",
            aliases: &["-"],
            arity: Arity::AtLeast(2),
            call: Operator::Variadic(sub_eval),
        },
        OperatorDefinition {
            name: "mul",
            aliases: &["*"],
            arity: Arity::AtLeast(2),
            call: Operator::Variadic(mul_eval),
        },
        OperatorDefinition {
            name: "div",
            aliases: &["/"],
            arity: Arity::AtLeast(2),
            call: Operator::Variadic(div_eval),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vals(items: &[Value]) -> Vec<Value> {
        items.to_vec()
    }

    #[test]
    fn test_integers_stay_integers() {
        let r = fold(&vals(&[2.into(), 3.into(), 4.into()]), i64::checked_mul, |a, b| a * b);
        assert!(matches!(r, Value::Number(Number::Int(24))));
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let r = fold(&vals(&[i64::MAX.into(), 1.into()]), i64::checked_add, |a, b| a + b);
        assert!(matches!(r, Value::Number(Number::Float(_))));
    }

    #[test]
    fn test_non_number_is_null() {
        let r = fold(&vals(&[1.into(), "2".into()]), i64::checked_add, |a, b| a + b);
        assert!(r.is_null());
        let r = fold(&vals(&[Value::Null, 2.into()]), i64::checked_add, |a, b| a + b);
        assert!(r.is_null());
    }
}
