use thiserror::Error;
use tracing::debug;

use crate::{
    ast::{Query, Step, Token, TokenKind},
    lexer::{LexError, Lexer},
};

/// Errors that make an expression impossible to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected part of the expression
    #[error("{error} at position {position}")]
    Lex {
        #[source]
        error: LexError,
        position: usize,
    },

    /// A well-formed token in a place the grammar does not allow
    #[error("unexpected token {text} at position {position}")]
    UnexpectedToken { text: String, position: usize },

    /// The expression ended inside brackets
    #[error("unclosed bracket opened at position {position}")]
    UnclosedBracket { position: usize },

    /// A quoted key with nothing between the quotes
    #[error("empty key at position {position}")]
    EmptyKey { position: usize },

    #[error("empty expression")]
    EmptyExpression,
}

impl ParseError {
    /// Position in the expression (in characters) the error points at.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lex { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnclosedBracket { position }
            | ParseError::EmptyKey { position } => Some(*position),
            ParseError::EmptyExpression => None,
        }
    }

    fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            text: token.to_string(),
            position: token.position,
        }
    }
}

/// Turns the lexer's tokens into a [`Query`].
///
/// A single left-to-right pass. Bare fields are committed as soon as they
/// are seen; a bracketed key or index is staged and only committed by the
/// closing bracket.
pub struct Parser {
    lexer: Lexer,
    source: String,
    /// Position of the open bracket while inside one
    bracket: Option<usize>,
    pending: Option<Step>,
    /// Set right after a leading `.` was skipped
    leading_dot: bool,
    steps: Vec<Step>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser {
            source: lexer.source(),
            lexer,
            bracket: None,
            pending: None,
            leading_dot: false,
            steps: Vec::new(),
        }
    }

    /// Consumes the parser, returning the compiled query.
    pub fn parse(mut self) -> Result<Query, ParseError> {
        match self.run() {
            Ok(()) => {
                debug!(source = %self.source, steps = self.steps.len(), "compiled query");
                Ok(Query::new(self.source, self.steps))
            }
            Err(error) => {
                debug!(source = %self.source, %error, "failed to compile query");
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<(), ParseError> {
        if self.source.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        loop {
            let token = self.lexer.next_token();

            // After a leading dot only a bracket or the end may follow
            if std::mem::take(&mut self.leading_dot)
                && !matches!(
                    token.kind,
                    TokenKind::BeginArray | TokenKind::EndOfInput | TokenKind::Error(_)
                )
            {
                return Err(ParseError::unexpected(&token));
            }

            match &token.kind {
                TokenKind::Field if self.bracket.is_none() => {
                    let key = token.text.strip_prefix('.').unwrap_or(&token.text);
                    self.steps.push(Step::Key(key.to_string()));
                }
                TokenKind::BeginArray if self.bracket.is_none() => {
                    self.bracket = Some(token.position);
                }
                TokenKind::QuotedString if self.bracket.is_some() && self.pending.is_none() => {
                    self.pending = Some(Step::Key(unquote(&token)?));
                }
                TokenKind::Number if self.bracket.is_some() && self.pending.is_none() => {
                    let index = token.text.parse::<usize>().map_err(|_| ParseError::Lex {
                        error: LexError::BadNumber(token.text.clone()),
                        position: token.position,
                    })?;
                    self.pending = Some(Step::Index(index));
                }
                TokenKind::EndArray if self.bracket.is_some() => match self.pending.take() {
                    Some(step) => {
                        self.steps.push(step);
                        self.bracket = None;
                    }
                    None => return Err(ParseError::unexpected(&token)),
                },
                // A leading dot before a bracket, as in `.[0]`
                TokenKind::Dot if token.position == 0 => self.leading_dot = true,
                TokenKind::EndOfInput => {
                    return match self.bracket {
                        Some(position) => Err(ParseError::UnclosedBracket { position }),
                        None => Ok(()),
                    };
                }
                TokenKind::Error(error) => {
                    return Err(ParseError::Lex {
                        error: error.clone(),
                        position: token.position,
                    });
                }
                _ => return Err(ParseError::unexpected(&token)),
            }
        }
    }
}

/// Strips the quotes from a quoted-string token and resolves backslash
/// escapes: `\x` stands for `x`.
fn unquote(token: &Token) -> Result<String, ParseError> {
    let mut chars = token.text.chars();
    chars.next();
    chars.next_back();

    let mut key = String::with_capacity(token.text.len());
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => key.extend(chars.next()),
            ch => key.push(ch),
        }
    }

    if key.is_empty() {
        return Err(ParseError::EmptyKey {
            position: token.position,
        });
    }
    Ok(key)
}
