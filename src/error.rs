use thiserror::Error;

use crate::{evaluator::EvalError, parser::ParseError};

/// Either stage of [`fetch`](crate::fetch) failing.
///
/// Keeps "the expression is malformed" apart from "the expression is fine
/// but the document does not match it".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn is_compile(&self) -> bool {
        matches!(self, Error::Compile(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, Error::Eval(_))
    }
}
