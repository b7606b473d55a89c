//! JSON rendering of query results.
//!
//! Thin wrappers over `serde_json` that fix the output conventions of the
//! `fetch` command: compact output on one line, or pretty output with a
//! configurable indent (four spaces by default). Object keys come out in
//! sorted order.
//!
//! # Examples
//!
//! ```
//! use fetchpath::output::{to_json, to_json_pretty};
//! use serde_json::json;
//!
//! let value = json!({"b": 1, "a": [true]});
//!
//! assert_eq!(to_json(&value).unwrap(), r#"{"a":[true],"b":1}"#);
//! assert_eq!(
//!     to_json_pretty(&value, 2).unwrap(),
//!     "{\n  \"a\": [\n    true\n  ],\n  \"b\": 1\n}"
//! );
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const DEFAULT_INDENT: usize = 4;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
