//! Evaluator configuration and load-time compilation of rules.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expr::Expr;
use crate::parse;
use crate::registry::{self, OperatorRegistry};
use crate::truth::Truth;
use crate::types::assert_arity;
use crate::value::Value;
use crate::vars::VarLookup;
use std::sync::Arc;

/// Options for [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum operator nesting, enforced when parsing, validating and
    /// evaluating.
    pub max_depth: usize,
}

impl EvaluatorOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        EvaluatorOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates expressions against an operator registry.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    operators: Arc<OperatorRegistry>,
    options: EvaluatorOptions,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(registry::builtins(), EvaluatorOptions::default())
    }
}

impl Evaluator {
    pub fn new(operators: Arc<OperatorRegistry>, options: EvaluatorOptions) -> Self {
        Evaluator { operators, options }
    }

    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn evaluate(&self, expr: &Expr, vars: &dyn VarLookup) -> Result<Value, EvalError> {
        let mut ctx = EvalCtx::new(vars, &self.operators, self.options.max_depth);
        evaluate(expr, &mut ctx)
    }

    /// Evaluates and collapses the result to a decision; `Null` is `false`.
    pub fn evaluate_bool(&self, expr: &Expr, vars: &dyn VarLookup) -> Result<bool, EvalError> {
        let value = self.evaluate(expr, vars)?;
        Ok(Truth::from_value(&value).is_true())
    }

    /// Parses JSON into an expression, honouring the configured depth limit.
    pub fn parse(&self, json: &serde_json::Value) -> Result<Expr, EvalError> {
        parse::parse_with_limit(json, self.options.max_depth)
    }

    /// Checks the whole tree up front: every operator is registered, every
    /// arity holds and the nesting is within the limit. Unlike evaluation,
    /// this also visits branches that short-circuiting would skip.
    pub fn validate(&self, expr: &Expr) -> Result<(), EvalError> {
        self.validate_node(expr, 0)
    }

    fn validate_node(&self, expr: &Expr, depth: usize) -> Result<(), EvalError> {
        let Expr::Call { operator, operands } = expr else {
            return Ok(());
        };
        if depth >= self.options.max_depth {
            return Err(EvalError::ExpressionTooDeep {
                limit: self.options.max_depth,
            });
        }
        let def = self.operators.resolve(operator)?;
        assert_arity(operator, &def.arity, operands.len())?;
        operands
            .iter()
            .try_for_each(|operand| self.validate_node(operand, depth + 1))
    }

    /// Parses and validates a rule so it can be evaluated repeatedly.
    pub fn compile(&self, json: &serde_json::Value) -> Result<CompiledExpression, EvalError> {
        let expr = self.parse(json)?;
        self.validate(&expr)?;
        tracing::debug!(depth = expr.depth(), "compiled expression");
        Ok(CompiledExpression {
            expr,
            evaluator: self.clone(),
        })
    }
}

/// A validated expression bound to the evaluator that compiled it.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    expr: Expr,
    evaluator: Evaluator,
}

impl CompiledExpression {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn call(&self, vars: &dyn VarLookup) -> Result<Value, EvalError> {
        self.evaluator.evaluate(&self.expr, vars)
    }

    pub fn call_bool(&self, vars: &dyn VarLookup) -> Result<bool, EvalError> {
        self.evaluator.evaluate_bool(&self.expr, vars)
    }
}

/// Parses and evaluates `json` once with the built-in operators.
pub fn evaluate_json(json: &serde_json::Value, vars: &dyn VarLookup) -> Result<Value, EvalError> {
    let evaluator = Evaluator::default();
    let expr = evaluator.parse(json)?;
    evaluator.evaluate(&expr, vars)
}
