//! Command-line support for the `fetch` binary.
//!
//! Kept in the library so the check logic can be tested and embedded
//! without spawning a process.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check, render};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] crate::ParseError),

    #[error("{0}")]
    Eval(#[from] crate::EvalError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("no input provided. Use --input, --file or pipe JSON to stdin.")]
    NoInput,
}
