//! JSON <-> Value conversion utilities

use crate::context::ContextError;
use crate::value::Value;

/// Convert serde_json::Value to Value
///
/// Numbers must be integers that fit in an `i64`.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, ContextError> {
    Ok(match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => return Err(ContextError::UnsupportedNumber(n)),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect::<Result<_, _>>()?)
        }
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(k, v)| Ok::<_, ContextError>((k, json_to_value(v)?)))
                .collect::<Result<_, ContextError>>()?,
        ),
    })
}

/// Convert Value to serde_json::Value
///
/// `Undefined` has no JSON form and becomes `null`.
pub fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Undefined | Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

pub(crate) fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ContextError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        json_to_value(v)
    }
}

impl Value {
    pub fn to_json(&self) -> serde_json::Value {
        value_to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_conversion() {
        let value = Value::try_from(json!({ "bar": [1, 2, 3] })).unwrap();
        let Value::Object(obj) = &value else {
            panic!("expected object, got {:?}", value);
        };
        assert_eq!(
            obj.get("bar"),
            Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]))
        );
        assert_eq!(value.to_json(), json!({ "bar": [1, 2, 3] }));
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        assert_eq!(Value::Undefined.to_json(), json!(null));
    }

    #[test]
    fn test_large_unsigned_is_rejected() {
        let err = json_to_value(json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, ContextError::UnsupportedNumber(_)));
    }
}
