use std::fmt;

use crate::ast::OperatorKind;
use crate::value::Value;

/// Kinds of operand tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Integer literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 0
    /// ```
    Number,

    /// String literal in single or double quotes, no escapes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    String,

    /// `true` or `false`
    Boolean,

    /// `null`
    Null,

    /// `undefined`
    Undefined,

    /// Property name following a `.`, or a value produced by evaluation
    ///
    /// # Examples
    /// ```text
    /// session.count   // `count` is an Identifier
    /// ```
    Identifier,

    /// Top-level name, resolved against the context during evaluation
    ///
    /// # Examples
    /// ```text
    /// session.count   // `session` is an ObjectRoot
    /// bazz[index]     // both `bazz` and `index` are ObjectRoots
    /// ```
    ObjectRoot,
}

/// An operand token: a kind plus the value it carries.
///
/// Operands are immutable once constructed; evaluation produces new operands
/// rather than modifying existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    kind: OperandKind,
    value: Value,
}

impl Operand {
    pub(crate) fn new(kind: OperandKind, value: Value) -> Self {
        Operand { kind, value }
    }

    pub fn number(n: i64) -> Self {
        Operand::new(OperandKind::Number, Value::Integer(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Operand::new(OperandKind::String, Value::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Operand::new(OperandKind::Boolean, Value::Boolean(b))
    }

    pub fn null() -> Self {
        Operand::new(OperandKind::Null, Value::Null)
    }

    pub fn undefined() -> Self {
        Operand::new(OperandKind::Undefined, Value::Undefined)
    }

    /// A property name, as scanned after a `.`
    pub fn identifier(name: impl Into<String>) -> Self {
        Operand::new(OperandKind::Identifier, Value::String(name.into()))
    }

    /// A top-level context name awaiting resolution
    pub fn object_root(name: impl Into<String>) -> Self {
        Operand::new(OperandKind::ObjectRoot, Value::String(name.into()))
    }

    /// An Identifier operand holding an already resolved value
    pub fn resolved(value: Value) -> Self {
        Operand::new(OperandKind::Identifier, value)
    }

    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A lexical token: either an operand or an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Operand(Operand),
    Operator(OperatorKind),
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl From<Operand> for Token {
    fn from(operand: Operand) -> Self {
        Token::Operand(operand)
    }
}

impl From<OperatorKind> for Token {
    fn from(kind: OperatorKind) -> Self {
        Token::Operator(kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(kind) => write!(f, "{}", kind),
            Token::Operand(operand) => match (operand.kind(), operand.value()) {
                (OperandKind::String, Value::String(s)) => write!(f, "{:?}", s),
                (OperandKind::Identifier | OperandKind::ObjectRoot, Value::String(name)) => {
                    f.write_str(name)
                }
                (_, Value::Integer(n)) => write!(f, "{}", n),
                (_, Value::Boolean(b)) => write!(f, "{}", b),
                (_, Value::Null) => f.write_str("null"),
                (_, Value::Undefined) => f.write_str("undefined"),
                (_, value) => write!(f, "<{}>", value.type_name()),
            },
        }
    }
}
