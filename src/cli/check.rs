//! Execute accessor expressions against JSON input

use super::CliError;
use crate::{Query, output};

/// Options for a single run of the `fetch` command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// The accessor expression
    pub query: String,
    /// JSON input text
    pub input: Option<String>,
    /// Print on one line instead of indenting
    pub compact: bool,
    /// Spaces per indentation level for pretty output
    pub indent: usize,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
    /// Print the compiled steps instead of executing
    pub show_steps: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            query: String::new(),
            input: None,
            compact: false,
            indent: output::DEFAULT_INDENT,
            syntax_only: false,
            show_steps: false,
        }
    }
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// The expression compiled; nothing was evaluated
    SyntaxValid(Query),
    /// The compiled steps were requested
    Steps(Query),
    /// The expression selected this value
    Success(serde_json::Value),
}

/// Compile the expression and, unless only compilation was asked for, run
/// it against the JSON input.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = Query::compile(&options.query)?;

    if options.show_steps {
        return Ok(CheckResult::Steps(query));
    }
    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(query));
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: serde_json::Value = serde_json::from_str(json_str)?;

    let selected = query.evaluate(&document)?;
    Ok(CheckResult::Success(selected.clone()))
}

/// Text printed to stdout for a check result.
pub fn render(result: &CheckResult, options: &CheckOptions) -> Result<String, CliError> {
    let text = match result {
        CheckResult::SyntaxValid(_) => "Syntax is valid".to_string(),
        CheckResult::Steps(query) => query
            .steps()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        CheckResult::Success(value) if options.compact => output::to_json(value)?,
        CheckResult::Success(value) => output::to_json_pretty(value, options.indent)?,
    };
    Ok(text)
}
