use crate::error::EvalError;
use crate::expr::Expr;
use crate::registry::OperatorRegistry;
use crate::value::Value;
use crate::vars::VarLookup;

/// State of one evaluation, passed to every operator.
///
/// Lazy operators call [`evaluate`](Self::evaluate) on the operands they
/// need; the depth guard applies to those calls too.
pub struct EvalCtx<'a> {
    /// The variables the expression is evaluated against.
    pub vars: &'a dyn VarLookup,
    /// The operators available for dispatch.
    pub operators: &'a OperatorRegistry,
    max_depth: usize,
    depth: usize,
}

impl<'a> EvalCtx<'a> {
    pub fn new(vars: &'a dyn VarLookup, operators: &'a OperatorRegistry, max_depth: usize) -> Self {
        EvalCtx {
            vars,
            operators,
            max_depth,
            depth: 0,
        }
    }

    /// Evaluates a sub-expression one level deeper.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        crate::evaluate::evaluate(expr, self)
    }

    /// Current operator nesting level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::ExpressionTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
