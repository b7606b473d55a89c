use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{Query, Step},
    value::{Kind, Node},
};

/// Errors that can occur while applying a valid query to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The step needs an object or array but found something else
    #[error("not of type {expected} (found {found})")]
    TypeMismatch { expected: Kind, found: Kind },

    /// The object has no such key
    #[error("key ({0}) does not exist")]
    KeyNotFound(String),

    /// The array is too short
    #[error("index ({index}) out of range")]
    IndexOutOfRange { index: usize, len: usize },
}

impl EvalError {
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, EvalError::TypeMismatch { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EvalError::KeyNotFound(_) | EvalError::IndexOutOfRange { .. }
        )
    }
}

/// Walks `root` along the query's steps.
///
/// Stops at the first step that cannot be applied. A query with no steps
/// returns `root` itself.
///
/// # Examples
///
/// ```
/// use fetchpath::{compile, evaluate};
/// use serde_json::json;
///
/// let query = compile(".a.b.c[1]").unwrap();
/// let doc = json!({"a": {"b": {"c": [0, 1]}}});
///
/// assert_eq!(evaluate(&query, &doc).unwrap(), &json!(1));
/// ```
pub fn evaluate<'v, N: Node>(query: &Query, root: &'v N) -> Result<&'v N, EvalError> {
    let mut current = root;

    for (depth, step) in query.steps().iter().enumerate() {
        trace!(%step, depth, "applying step");
        current = apply_step(step, current).inspect_err(|error| {
            debug!(query = %query, %step, depth, %error, "evaluation failed");
        })?;
    }

    Ok(current)
}

/// Resolves a single step against `value`.
pub fn apply_step<'v, N: Node>(step: &Step, value: &'v N) -> Result<&'v N, EvalError> {
    match step {
        Step::Key(key) => member(value, key),
        Step::Index(index) => element(value, *index),
    }
}

fn member<'v, N: Node>(value: &'v N, key: &str) -> Result<&'v N, EvalError> {
    match value.kind() {
        Kind::Object => value
            .member(key)
            .ok_or_else(|| EvalError::KeyNotFound(key.to_string())),
        found => Err(EvalError::TypeMismatch {
            expected: Kind::Object,
            found,
        }),
    }
}

fn element<N: Node>(value: &N, index: usize) -> Result<&N, EvalError> {
    let Some(len) = value.array_len() else {
        return Err(EvalError::TypeMismatch {
            expected: Kind::Array,
            found: value.kind(),
        });
    };

    if index >= len {
        return Err(EvalError::IndexOutOfRange { index, len });
    }
    value
        .element(index)
        .ok_or(EvalError::IndexOutOfRange { index, len })
}
