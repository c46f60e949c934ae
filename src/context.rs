//! Read-only variable bindings for evaluation.

use std::collections::HashMap;

use thiserror::Error;

use crate::convert::{json_to_value, json_type_name};
use crate::value::Value;

/// Errors raised while building a [`Context`] from JSON.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("context must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("unsupported number {0}: only integers that fit in 64 bits are supported")]
    UnsupportedNumber(serde_json::Number),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level names visible to an expression.
///
/// Bare words in an expression (`session` in `session.count`) are looked up
/// here. Names that are not bound resolve to [`Value::Undefined`]. The
/// evaluator only ever reads from a context, so one context can back any
/// number of evaluations, including concurrent ones.
///
/// # Examples
///
/// ```
/// use expresso::{evaluate, Context, Value};
/// use serde_json::json;
///
/// let ctx = Context::from_json(json!({ "session": { "count": 3 } })).unwrap();
/// assert_eq!(evaluate("session.count", &ctx).unwrap(), Value::Integer(3));
///
/// let ctx = Context::new().with("limit", Value::Integer(10));
/// assert_eq!(evaluate("limit * 2", &ctx).unwrap(), Value::Integer(20));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    bindings: HashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding and returns the context, for chained construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name`, returning the value it previously had.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Looks up `name`, yielding [`Value::Undefined`] when it is not bound.
    pub fn resolve(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Undefined)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Builds a context from a JSON object; each member becomes a binding.
    pub fn from_json(json: serde_json::Value) -> Result<Self, ContextError> {
        match json {
            serde_json::Value::Object(members) => members
                .into_iter()
                .map(|(name, value)| Ok::<_, ContextError>((name, json_to_value(value)?)))
                .collect(),
            other => Err(ContextError::NotAnObject(json_type_name(&other))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ContextError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Context {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Context {
    fn from(bindings: HashMap<String, Value>) -> Self {
        Context { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object() {
        let ctx = Context::from_json(json!({ "a": 1, "b": [true, null] })).unwrap();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("a"), Some(&Value::Integer(1)));
        assert_eq!(
            ctx.get("b"),
            Some(&Value::Array(vec![Value::Boolean(true), Value::Null]))
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Context::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ContextError::NotAnObject("array")));
    }

    #[test]
    fn test_from_json_rejects_floats() {
        let err = Context::from_json(json!({ "ratio": 0.5 })).unwrap_err();
        assert!(matches!(err, ContextError::UnsupportedNumber(_)));
    }

    #[test]
    fn test_from_json_str_reports_syntax_errors() {
        let err = Context::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ContextError::Json(_)));
    }

    #[test]
    fn test_resolve_missing_is_undefined() {
        let ctx = Context::new().with("x", Value::Integer(1));
        assert_eq!(ctx.resolve("x"), Value::Integer(1));
        assert_eq!(ctx.resolve("y"), Value::Undefined);
    }
}
