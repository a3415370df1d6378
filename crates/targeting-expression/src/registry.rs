//! Operator name → definition lookup.

use crate::error::EvalError;
use crate::operators;
use crate::types::OperatorDefinition;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Maps operator names and aliases to their definitions.
///
/// Populate it with [`register`](Self::register) before sharing it (usually
/// behind an `Arc`); once shared it is read-only and safe to use from any
/// number of concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, Arc<OperatorDefinition>>,
}

impl OperatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        OperatorRegistry::default()
    }

    /// A registry holding every built-in operator.
    pub fn with_builtins() -> Self {
        let mut registry = OperatorRegistry::new();
        for def in operators::all_operators() {
            registry.register(def);
        }
        registry
    }

    /// Adds an operator under its name and each of its aliases, replacing any
    /// operator already registered under those names.
    pub fn register(&mut self, def: OperatorDefinition) {
        tracing::debug!(
            operator = def.name,
            aliases = ?def.aliases,
            arity = %def.arity,
            "registering operator"
        );
        let def = Arc::new(def);
        self.operators.insert(def.name.to_string(), Arc::clone(&def));
        for alias in def.aliases {
            self.operators.insert(alias.to_string(), Arc::clone(&def));
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&Arc<OperatorDefinition>, EvalError> {
        self.operators
            .get(name)
            .ok_or_else(|| EvalError::UnknownOperator(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// All registered names and aliases, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The process-wide built-in registry.
pub fn builtins() -> Arc<OperatorRegistry> {
    static BUILTINS: OnceLock<Arc<OperatorRegistry>> = OnceLock::new();
    Arc::clone(BUILTINS.get_or_init(|| Arc::new(OperatorRegistry::with_builtins())))
}
