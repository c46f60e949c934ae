//! # Expression tokens
//!
//! Every stage of the pipeline speaks in terms of [`Token`]s:
//!
//! ```text
//! text ──scanner──▶ tokens ──postfix──▶ postfix tokens ──evaluator──▶ value
//! ```
//!
//! - **[tokens]** - the [`Token`] sum type and its [`Operand`] payload
//! - **[operators]** - [`OperatorKind`] with precedence and associativity
//!
//! ## Operands and operators
//!
//! A token is either an operand (a literal, a property name, or a top-level
//! context name) or an operator. There is no syntax tree: the postfix
//! converter reorders the flat token sequence and the evaluator reduces it
//! with a stack.
//!
//! ## Property access
//!
//! Dotted access and bracket indexing share one operator. The scanner emits
//! an implicit `.` before every `[`, so these two expressions flow through
//! the pipeline the same way:
//!
//! ```text
//! session.count
//! session["count"]
//! ```
pub mod operators;
pub mod tokens;

pub use operators::OperatorKind;
pub use tokens::{Operand, OperandKind, Token};
