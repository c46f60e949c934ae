use std::fmt;

use crate::{
    ast::Token,
    context::Context,
    evaluator::{EvalError, evaluate_postfix},
    postfix::to_postfix,
    scanner::tokenize,
    value::Value,
};

/// An expression scanned and converted once, ready to evaluate repeatedly.
///
/// Compiling never fails: unrecognized input is carried as
/// [`OperatorKind::Unknown`](crate::OperatorKind::Unknown) tokens and only
/// surfaces when the expression is evaluated.
///
/// # Examples
///
/// ```
/// use expresso::{Context, Expression, Value};
///
/// let rule = Expression::compile("cart.total >= 100");
///
/// let small = Context::from_json(serde_json::json!({ "cart": { "total": 20 } })).unwrap();
/// let large = Context::from_json(serde_json::json!({ "cart": { "total": 250 } })).unwrap();
///
/// assert_eq!(rule.evaluate(&small).unwrap(), Value::Boolean(false));
/// assert_eq!(rule.evaluate(&large).unwrap(), Value::Boolean(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    postfix: Vec<Token>,
}

impl Expression {
    pub fn compile(source: &str) -> Self {
        let postfix = to_postfix(&tokenize(source));
        tracing::debug!(source, tokens = postfix.len(), "compiled expression");
        Expression {
            source: source.to_string(),
            postfix,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The cached postfix token sequence
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn evaluate(&self, context: &Context) -> Result<Value, EvalError> {
        evaluate_postfix(&self.postfix, context)
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Expression::compile(source)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
