use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::expr::Expr;
use crate::value::Value;
use std::fmt;

/// Operator arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` operands.
    Fixed(usize),
    /// `n` or more operands.
    AtLeast(usize),
    /// Between `min` and `max` operands. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Fixed(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Range(min, max) => count >= min && max.map_or(true, |max| count <= max),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Range(min, Some(max)) => write!(f, "{} to {}", min, max),
            Arity::Range(min, None) => write!(f, "at least {}", min),
        }
    }
}

pub type UnaryFn = fn(Value) -> Result<Value, EvalError>;
pub type BinaryFn = for<'a> fn(&mut EvalCtx<'a>, Value, Value) -> Result<Value, EvalError>;
pub type VariadicFn = for<'a> fn(&mut EvalCtx<'a>, Vec<Value>) -> Result<Value, EvalError>;
pub type LazyFn = for<'a> fn(&mut EvalCtx<'a>, &[Expr]) -> Result<Value, EvalError>;

/// How an operator is called.
///
/// For `Unary`, `Binary` and `Variadic` the evaluator evaluates every operand
/// first, left to right. `Lazy` operators get the operand nodes themselves
/// and decide what to evaluate.
#[derive(Clone, Copy)]
pub enum Operator {
    Unary(UnaryFn),
    Binary(BinaryFn),
    Variadic(VariadicFn),
    Lazy(LazyFn),
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Unary(_) => "Unary",
            Operator::Binary(_) => "Binary",
            Operator::Variadic(_) => "Variadic",
            Operator::Lazy(_) => "Lazy",
        })
    }
}

/// A named operator with its aliases and declared arity.
#[derive(Debug, Clone)]
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub call: Operator,
}

/// Checks that `operator` was given an acceptable number of operands.
pub fn assert_arity(operator: &str, arity: &Arity, operands: usize) -> Result<(), EvalError> {
    if arity.accepts(operands) {
        Ok(())
    } else {
        Err(EvalError::ArityMismatch {
            operator: operator.to_string(),
            expected: arity.to_string(),
            actual: operands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(Arity::Fixed(2).accepts(2));
        assert!(!Arity::Fixed(2).accepts(3));
        assert!(Arity::AtLeast(1).accepts(5));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::Range(1, Some(2)).accepts(2));
        assert!(!Arity::Range(1, Some(2)).accepts(3));
        assert!(Arity::Range(1, None).accepts(30));
    }

    #[test]
    fn test_assert_arity_message() {
        let err = assert_arity("gte", &Arity::Fixed(2), 1).unwrap_err();
        assert_eq!(err.to_string(), "\"gte\" operator expects 2 operands, got 1.");
    }
}
