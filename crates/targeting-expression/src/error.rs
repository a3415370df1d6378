use thiserror::Error;

/// Structural failures of a rule. Data-shape mismatches never end up here;
/// they evaluate to `Null`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("\"{operator}\" operator expects {expected} operands, got {actual}.")]
    ArityMismatch {
        operator: String,
        expected: String,
        actual: usize,
    },

    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Expression nesting exceeds the limit of {limit}.")]
    ExpressionTooDeep { limit: usize },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}
