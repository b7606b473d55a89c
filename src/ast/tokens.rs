use std::fmt;

use crate::lexer::LexError;

/// The kind of a lexical token, carrying its own display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Opening bracket of an accessor
    ///
    /// # Examples
    /// ```text
    /// .[0]
    /// .foo["bar"]
    /// ```
    BeginArray,

    /// Closing bracket
    EndArray,

    /// Quoted key inside brackets, single or double quoted
    ///
    /// The token text keeps the quotes and any backslash escapes verbatim.
    ///
    /// # Examples
    /// ```text
    /// "bar.baz"
    /// 'escape.key'
    /// "say \"hi\""
    /// ```
    QuotedString,

    /// Run of decimal digits
    ///
    /// No sign, fraction or exponent.
    Number,

    /// A dot not followed by an identifier character
    ///
    /// Only meaningful as the very first token, e.g. the `.` in `.[0]`.
    Dot,

    /// Bare field name, including its leading dot
    ///
    /// # Examples
    /// ```text
    /// .foo
    /// .item_count
    /// .0
    /// ```
    Field,

    /// Malformed input; scanning stops after this token
    Error(LexError),

    /// End of input
    EndOfInput,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::BeginArray => "'['",
            TokenKind::EndArray => "']'",
            TokenKind::QuotedString => "quoted string",
            TokenKind::Number => "number",
            TokenKind::Dot => "'.'",
            TokenKind::Field => "field",
            TokenKind::Error(_) => "error",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token together with where it starts in the expression.
///
/// `position` counts characters, not bytes, from the start of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize, text: impl Into<String>) -> Self {
        Token {
            kind,
            position,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            f.write_str(&self.text)
        }
    }
}
