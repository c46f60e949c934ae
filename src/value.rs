use std::collections::HashMap;

/// A dynamic value flowing through the evaluation pipeline.
///
/// Literals, context bindings and intermediate results are all represented
/// by this type. It mirrors JSON with two differences: numbers are always
/// integers, and there is a distinct [`Value::Undefined`] for absent values
/// (missing context keys, out-of-range indices, unknown operators).
///
/// # Examples
///
/// ```
/// use expresso::Value;
/// use std::collections::HashMap;
///
/// let count = Value::Integer(3);
/// let name = Value::from("session");
///
/// let mut obj = HashMap::new();
/// obj.insert("count".to_string(), count);
/// let session = Value::Object(obj);
///
/// assert_eq!(session.type_name(), "object");
/// assert_eq!(name.type_name(), "string");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,

    /// Explicit null
    Null,

    /// Boolean (true/false)
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys
    Object(HashMap<String, Value>),
}

impl Value {
    /// Check if the value is truthy (for logical operators)
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Undefined | Null => false,
            Boolean(b) => *b,
            Integer(n) => *n != 0,
            String(s) => !s.is_empty(),
            Array(_) | Object(_) => true,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
