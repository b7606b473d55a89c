//! # Accessor expressions - data types
//!
//! This module defines the types that flow through the three stages of the
//! crate: tokens produced by the lexer, steps produced by the parser, and
//! the compiled [`Query`] handed to the evaluator.
//!
//! - **[tokens]** - Lexical tokens and their kinds
//! - **[steps]** - Single access operations (by key, by index)
//! - **[query]** - The compiled, reusable step sequence
//!
//! ## Syntax
//!
//! ```text
//! .                       // the root itself
//! .foo                    // key "foo"
//! .foo[2]                 // third element of "foo"
//! .foo["bar.baz"]         // key containing a dot
//! .['escape.key'].nested  // single quotes work too
//! .[0]                    // leading dot before a bracket is optional
//! ```
//!
//! Bare fields are made of letters, digits and underscores. Anything else
//! must be quoted inside brackets. Brackets do not nest, and a bracket holds
//! exactly one quoted key or one non-negative integer.
pub mod query;
pub mod steps;
pub mod tokens;

pub use query::Query;
pub use steps::Step;
pub use tokens::{Token, TokenKind};
