//! Built-in operators.

pub mod arithmetic;
pub mod comparison;
pub mod logical;
pub mod membership;
pub mod pattern;

use crate::types::OperatorDefinition;

/// Every built-in operator definition.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(membership::operators());
    ops.extend(pattern::operators());
    ops.extend(arithmetic::operators());
    ops
}
