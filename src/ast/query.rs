use std::{fmt, str::FromStr};

use crate::{
    ast::Step,
    evaluator::{self, EvalError},
    lexer::Lexer,
    parser::{ParseError, Parser},
    value::Node,
};

/// A compiled accessor expression.
///
/// Holds the steps in evaluation order together with the source text it was
/// compiled from. A query never changes after compilation, so one instance
/// can be evaluated any number of times, from any number of threads.
///
/// # Examples
///
/// ```
/// use fetchpath::Query;
/// use serde_json::json;
///
/// let query = Query::compile(".users[1].name").unwrap();
/// let doc = json!({"users": [{"name": "ann"}, {"name": "bob"}]});
///
/// assert_eq!(query.evaluate(&doc).unwrap(), &json!("bob"));
/// assert_eq!(query.source(), ".users[1].name");
/// assert_eq!(query.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    source: String,
    steps: Vec<Step>,
}

impl Query {
    pub(crate) fn new(source: impl Into<String>, steps: Vec<Step>) -> Self {
        Query {
            source: source.into(),
            steps,
        }
    }

    /// Compiles an accessor expression.
    pub fn compile(source: &str) -> Result<Self, ParseError> {
        Parser::new(Lexer::new(source)).parse()
    }

    /// Applies the query to `root`, returning the value it points at.
    pub fn evaluate<'v, N: Node>(&self, root: &'v N) -> Result<&'v N, EvalError> {
        evaluator::evaluate(self, root)
    }

    /// The expression exactly as it was given to [`Query::compile`].
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True for `.`, which returns the root unchanged.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::compile(s)
    }
}
