//! CLI support for expresso
//!
//! Provides programmatic access to the `expresso` command functionality for
//! embedding in other tools.

mod eval;
mod inspect;

pub use eval::{EvalOptions, execute_eval, render_value};
pub use inspect::{render_postfix, render_tokens};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    #[error("Invalid context: {0}")]
    Context(#[from] crate::ContextError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
