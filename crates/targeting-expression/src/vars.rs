use crate::error::EvalError;
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// Read-only variable source an expression is evaluated against.
pub trait VarLookup {
    /// Returns the top-level variable `name`, or `None` if it is not set.
    fn lookup(&self, name: &str) -> Option<Value>;
}

/// Resolves a slash-separated path such as `user/tags/0`.
///
/// The first segment names a variable; later segments index into maps by key
/// and into lists by position. Anything that does not resolve is `Null`.
pub fn extract(vars: &dyn VarLookup, path: &str) -> Value {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let Some(name) = segments.next() else {
        return Value::Null;
    };
    let Some(mut current) = vars.lookup(name) else {
        return Value::Null;
    };
    for segment in segments {
        let next = match &current {
            Value::Map(map) => map.get(segment).cloned(),
            Value::List(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i).cloned()),
            _ => None,
        };
        match next {
            Some(v) => current = v,
            None => return Value::Null,
        }
    }
    current
}

/// Variable store backed by an ordered map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars {
    vars: BTreeMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Vars::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Builds a store from a JSON object; each member becomes a variable.
    pub fn from_json(json: serde_json::Value) -> Result<Self, EvalError> {
        match json {
            serde_json::Value::Object(map) => Ok(Vars {
                vars: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(EvalError::MalformedExpression(format!(
                "variables must be a JSON object, got {}",
                other
            ))),
        }
    }
}

impl VarLookup for Vars {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }
}

impl VarLookup for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl VarLookup for HashMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl VarLookup for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).map(Value::from)
    }
}

/// Adapts a closure into a [`VarLookup`].
pub struct FnLookup<F>(pub F);

impl<F> VarLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<Value>,
{
    fn lookup(&self, name: &str) -> Option<Value> {
        (self.0)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vars {
        Vars::from_json(json!({
            "age": 25,
            "user": {"tags": ["beta", "vip"], "address": {"country": "NL"}}
        }))
        .unwrap()
    }

    #[test]
    fn test_top_level() {
        assert_eq!(extract(&sample(), "age"), Value::from(25));
    }

    #[test]
    fn test_nested_path() {
        let vars = sample();
        assert_eq!(extract(&vars, "user/address/country"), Value::from("NL"));
        assert_eq!(extract(&vars, "user/tags/1"), Value::from("vip"));
        assert_eq!(extract(&vars, "/user//tags/0/"), Value::from("beta"));
    }

    #[test]
    fn test_misses_are_null() {
        let vars = sample();
        assert!(extract(&vars, "missing").is_null());
        assert!(extract(&vars, "user/tags/7").is_null());
        assert!(extract(&vars, "user/tags/x").is_null());
        assert!(extract(&vars, "age/x").is_null());
        assert!(extract(&vars, "").is_null());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(Vars::from_json(json!([1])).is_err());
    }

    #[test]
    fn test_fn_lookup() {
        let vars = FnLookup(|name: &str| (name == "x").then(|| Value::from(1)));
        assert_eq!(extract(&vars, "x"), Value::from(1));
        assert!(extract(&vars, "y").is_null());
    }

    #[test]
    fn test_json_map_lookup() {
        let json = json!({"a": {"b": true}});
        let map = json.as_object().unwrap().clone();
        assert_eq!(extract(&map, "a/b"), Value::Bool(true));
    }
}
