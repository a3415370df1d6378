//! Parsed expression tree.

use crate::value::Value;

/// A node of a targeting rule.
///
/// Trees are built once (usually by [`crate::parse::parse`]) and evaluated
/// many times; nothing in the evaluator mutates them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant.
    Literal(Value),
    /// A slash-separated variable path, resolved against the context.
    Var(String),
    /// An operator applied to its operands, in source order.
    Call { operator: String, operands: Vec<Expr> },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Expr {
        Expr::Literal(value.into())
    }

    pub fn var(path: impl Into<String>) -> Expr {
        Expr::Var(path.into())
    }

    pub fn call(operator: impl Into<String>, operands: Vec<Expr>) -> Expr {
        Expr::Call {
            operator: operator.into(),
            operands,
        }
    }

    /// Number of nested operator levels, counting this node.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Var(_) => 0,
            Expr::Call { operands, .. } => {
                1 + operands.iter().map(Expr::depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(Expr::literal(1).depth(), 0);
        assert_eq!(Expr::var("a").depth(), 0);
        let e = Expr::call(
            "and",
            vec![
                Expr::call("not", vec![Expr::call("not", vec![Expr::literal(true)])]),
                Expr::literal(true),
            ],
        );
        assert_eq!(e.depth(), 3);
    }
}
