use std::fmt;

/// One resolved access operation, applied in order by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Look up a key on an object
    ///
    /// Produced by bare fields and by quoted bracket keys. Quoted keys have
    /// their backslash escapes resolved, so `["C:\\dir"]` holds `C:\dir`
    /// and `["a\"b"]` holds `a"b`.
    ///
    /// # Examples
    /// ```text
    /// .foo          => Key("foo")
    /// ["bar.baz"]   => Key("bar.baz")
    /// ```
    Key(String),

    /// Take the element at a position in an array
    ///
    /// # Examples
    /// ```text
    /// [0]   => Index(0)
    /// ```
    Index(usize),
}

fn is_plain_field(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Renders the step as accessor syntax. Keys without line breaks compile
/// back to the same step.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) if is_plain_field(key) => write!(f, ".{}", key),
            Step::Key(key) => {
                f.write_str("[\"")?;
                for c in key.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("\"]")
            }
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}
