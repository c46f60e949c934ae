//! # expresso
//!
//! Sandboxed evaluation of small arithmetic and logical expressions against a
//! tree of named values.
//!
//! ```
//! use expresso::{evaluate, Context, Value};
//! use serde_json::json;
//!
//! let ctx = Context::from_json(json!({ "foo": { "bar": [1, 2, 3] } })).unwrap();
//! assert_eq!(evaluate("foo.bar[1] * foo.bar[2]", &ctx).unwrap(), Value::Integer(6));
//! assert_eq!(evaluate("(8 + 2) * 6", &Context::default()).unwrap(), Value::Integer(60));
//! ```
//!
//! Evaluation runs in three stages, each usable on its own:
//! [`tokenize`] → [`to_postfix`] → [`evaluate_postfix`].

pub mod ast;
pub mod cli;
pub mod context;
pub mod convert;
pub mod evaluator;
pub mod expression;
pub mod postfix;
pub mod scanner;
pub mod value;

pub use ast::{Operand, OperandKind, OperatorKind, Token};
pub use context::{Context, ContextError};
pub use evaluator::{EvalError, Evaluator, evaluate_postfix};
pub use expression::Expression;
pub use postfix::to_postfix;
pub use scanner::{ScanState, Scanner, tokenize};
pub use value::Value;

/// Scans, converts and evaluates `expression` against `context`.
#[tracing::instrument(level = "debug", skip(context))]
pub fn evaluate(expression: &str, context: &Context) -> Result<Value, EvalError> {
    let tokens = tokenize(expression);
    let postfix = to_postfix(&tokens);
    evaluate_postfix(&postfix, context)
}
