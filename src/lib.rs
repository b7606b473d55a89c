//! Query nested data with javascript-style accessor expressions.
//!
//! An expression such as `.foo[2]["bar.baz"]` is compiled once into a
//! [`Query`] (a list of key and index steps) and then applied to any value
//! tree implementing [`Node`], such as a decoded `serde_json::Value`.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"arrayObj": [{"name": "foo"}]});
//! let name = fetchpath::fetch(".arrayObj[0].name", &doc).unwrap();
//! assert_eq!(name, &json!("foo"));
//! ```
//!
//! Callers evaluating the same expression repeatedly should [`compile`] it
//! once and call [`Query::evaluate`] instead.
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Query, Step, Token, TokenKind};
pub use error::Error;
pub use evaluator::{EvalError, evaluate};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use value::{Kind, Node};

/// Compiles an accessor expression into a reusable [`Query`].
pub fn compile(expression: &str) -> Result<Query, ParseError> {
    Query::compile(expression)
}

/// Compiles `expression` and applies it to `root` in one go.
pub fn fetch<'v, N: Node>(expression: &str, root: &'v N) -> Result<&'v N, Error> {
    let query = compile(expression)?;
    Ok(query.evaluate(root)?)
}
