//! Evaluate expressions against JSON context

use super::CliError;
use crate::{Context, Value, evaluate};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON object supplying the context; empty context when absent
    pub context: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Execute an eval operation, returning the rendered result
pub fn execute_eval(options: &EvalOptions) -> Result<String, CliError> {
    let context = match options.context.as_deref() {
        Some(json) if !json.trim().is_empty() => Context::from_json_str(json)?,
        _ => Context::default(),
    };

    let result = evaluate(&options.expression, &context)?;
    render_value(&result, options.pretty)
}

/// Render a value as JSON. `undefined` has no JSON form and is printed as is.
pub fn render_value(value: &Value, pretty: bool) -> Result<String, CliError> {
    if value.is_undefined() {
        return Ok("undefined".to_string());
    }

    let json = value.to_json();
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }?;
    Ok(rendered)
}
