//! Audience filters: `{"filter": <expression or list of expressions>}`.

use crate::compile::Evaluator;
use crate::error::EvalError;
use crate::expr::Expr;
use crate::truth::Truth;
use crate::vars::VarLookup;
use serde_json::Value as Json;

/// Decides whether a set of variables belongs to an audience.
#[derive(Debug, Clone, Default)]
pub struct AudienceMatcher {
    evaluator: Evaluator,
}

impl AudienceMatcher {
    pub fn new(evaluator: Evaluator) -> Self {
        AudienceMatcher { evaluator }
    }

    /// Evaluates the audience's filter.
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate: the audience is
    /// not a JSON object, has no `filter`, or the filter is a scalar. A list
    /// filter is the conjunction of its elements, so an empty one matches.
    /// The whole filter is validated before evaluation, so unknown operators
    /// and bad arities fail even in branches that would be short-circuited.
    /// An unknown filter result counts as no match.
    pub fn evaluate(&self, audience: &str, vars: &dyn VarLookup) -> Result<Option<bool>, EvalError> {
        let parsed: Json = match serde_json::from_str(audience) {
            Ok(json) => json,
            Err(err) => {
                tracing::debug!(error = %err, "audience is not valid JSON");
                return Ok(None);
            }
        };
        let Some(filter) = parsed.as_object().and_then(|obj| obj.get("filter")) else {
            return Ok(None);
        };
        let expr = match filter {
            Json::Array(items) => Expr::Call {
                operator: "and".to_string(),
                operands: items
                    .iter()
                    .map(|item| self.evaluator.parse(item))
                    .collect::<Result<Vec<_>, _>>()?,
            },
            Json::Object(_) => self.evaluator.parse(filter)?,
            _ => return Ok(None),
        };
        // The implicit `and` counts toward the depth limit like any other call.
        self.evaluator.validate(&expr)?;
        let value = self.evaluator.evaluate(&expr, vars)?;
        Ok(Some(Truth::from_value(&value).is_true()))
    }
}
