use std::fmt;

/// The JSON type of a value, as seen by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed tree that queries can walk.
///
/// The evaluator only needs to tell the kinds apart and to look up object
/// members and array elements, so any JSON-like document can be queried by
/// implementing these four methods. An implementation is provided for
/// [`serde_json::Value`].
///
/// # Examples
///
/// ```
/// use fetchpath::{Kind, Node};
/// use serde_json::json;
///
/// let doc = json!({"tags": ["a", "b"]});
///
/// assert_eq!(doc.kind(), Kind::Object);
/// let tags = doc.member("tags").unwrap();
/// assert_eq!(tags.array_len(), Some(2));
/// assert_eq!(tags.element(1), Some(&json!("b")));
/// ```
pub trait Node {
    fn kind(&self) -> Kind;

    /// The value stored under `key`, if `self` is an object holding it.
    fn member(&self, key: &str) -> Option<&Self>;

    /// The element at `index`, if `self` is an array long enough.
    fn element(&self, index: usize) -> Option<&Self>;

    /// Number of elements, if `self` is an array.
    fn array_len(&self) -> Option<usize>;
}

impl Node for serde_json::Value {
    fn kind(&self) -> Kind {
        use serde_json::Value::*;
        match self {
            Null => Kind::Null,
            Bool(_) => Kind::Boolean,
            Number(_) => Kind::Number,
            String(_) => Kind::String,
            Array(_) => Kind::Array,
            Object(_) => Kind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }
}
