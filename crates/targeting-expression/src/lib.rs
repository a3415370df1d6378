//! Targeting rule evaluator.
//!
//! # Overview
//!
//! Rules are JSON trees of operator nodes, `{"<operator>": [operands...]}`,
//! with variables written as `{"var": "<path>"}`. They evaluate to a
//! [`Value`] under three-valued logic: comparing values that have no order
//! (say a number with a string) gives `Null`, and `Null` flows through `and`,
//! `or` and `not` as "unknown". Structural problems in a rule, such as an
//! unknown operator or a wrong operand count, are errors.
//!
//! # Example
//!
//! ```
//! use targeting_expression::{Evaluator, Value, Vars};
//! use serde_json::json;
//!
//! let evaluator = Evaluator::default();
//! let rule = evaluator
//!     .compile(&json!({"and": [
//!         {"gte": [{"var": "age"}, 18]},
//!         {"lt": [{"var": "age"}, 65]}
//!     ]}))
//!     .unwrap();
//!
//! let vars = Vars::new().with("age", 25);
//! assert_eq!(rule.call(&vars).unwrap(), Value::Bool(true));
//! ```

pub mod audience;
pub mod compare;
pub mod compile;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod expr;
pub mod operators;
pub mod parse;
pub mod registry;
pub mod truth;
pub mod types;
pub mod value;
pub mod vars;

pub use audience::AudienceMatcher;
pub use compare::{compare, equals};
pub use compile::{evaluate_json, CompiledExpression, Evaluator, EvaluatorOptions};
pub use error::EvalError;
pub use eval_ctx::EvalCtx;
pub use evaluate::evaluate;
pub use expr::Expr;
pub use parse::{parse, parse_str};
pub use registry::OperatorRegistry;
pub use truth::Truth;
pub use types::{Arity, Operator, OperatorDefinition};
pub use value::{Kind, Number, Value};
pub use vars::{FnLookup, VarLookup, Vars};
