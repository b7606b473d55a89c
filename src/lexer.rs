use thiserror::Error;
use tracing::trace;

use crate::ast::{Token, TokenKind};

/// Malformed input found while scanning an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("bad character {}", describe_char(.0))]
    BadCharacter(char),

    #[error("unterminated quoted string")]
    UnterminatedString,

    #[error("bad number syntax: {0:?}")]
    BadNumber(String),
}

/// Splits an accessor expression into tokens.
///
/// The lexer is a pull-based iterator: every call to [`Lexer::next_token`]
/// scans exactly one token. The sequence ends with a single
/// [`TokenKind::EndOfInput`] or [`TokenKind::Error`] token, after which the
/// iterator is exhausted.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            finished: false,
        }
    }

    /// The expression being scanned.
    pub fn source(&self) -> String {
        self.input.iter().collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, start, self.text_from(start))
    }

    fn error(&self, error: LexError, start: usize) -> Token {
        self.token(TokenKind::Error(error), start)
    }

    fn read_field(&mut self, start: usize) -> Token {
        self.advance(); // Consume '.'
        while self.current_char().is_some_and(is_identifier) {
            self.advance();
        }

        match self.current_char() {
            Some(ch) if !is_terminator(ch) => {
                self.advance();
                self.error(LexError::BadCharacter(ch), start)
            }
            _ => self.token(TokenKind::Field, start),
        }
    }

    fn read_quoted(&mut self, quote: char, start: usize) -> Token {
        self.advance(); // Consume opening quote

        loop {
            match self.current_char() {
                None | Some('\n') => return self.error(LexError::UnterminatedString, start),
                Some('\\') => {
                    self.advance();
                    match self.current_char() {
                        None | Some('\n') => {
                            return self.error(LexError::UnterminatedString, start);
                        }
                        Some(_) => self.advance(),
                    }
                }
                Some(ch) if ch == quote => {
                    self.advance();
                    return self.token(TokenKind::QuotedString, start);
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let digits = self.text_from(start);
        if digits.parse::<usize>().is_err() {
            return self.error(LexError::BadNumber(digits), start);
        }
        self.token(TokenKind::Number, start)
    }

    /// Scans the next token.
    ///
    /// Once the end of input or an error has been reached, every further
    /// call returns [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        if self.finished {
            return Token::new(TokenKind::EndOfInput, start, "");
        }

        let token = match self.current_char() {
            None => Token::new(TokenKind::EndOfInput, start, ""),
            Some('[') => {
                self.advance();
                self.token(TokenKind::BeginArray, start)
            }
            Some(']') => {
                self.advance();
                self.token(TokenKind::EndArray, start)
            }
            Some(quote @ ('"' | '\'')) => self.read_quoted(quote, start),
            Some('.') if self.peek_char(1).is_some_and(is_identifier) => self.read_field(start),
            Some('.') => {
                self.advance();
                self.token(TokenKind::Dot, start)
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(start),
            Some(ch) => {
                self.advance();
                self.error(LexError::BadCharacter(ch), start)
            }
        };

        if matches!(token.kind, TokenKind::EndOfInput | TokenKind::Error(_)) {
            self.finished = true;
        }
        trace!(kind = %token.kind, position = token.position, text = %token.text, "scanned token");
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Formats a character the way error messages show it, e.g. `U+0021 '!'`.
fn describe_char(ch: &char) -> String {
    format!("U+{:04X} '{}'", *ch as u32, ch)
}

/// Letters, digits and underscore may appear in a bare field name.
fn is_identifier(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Characters allowed to directly follow a bare field name.
fn is_terminator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\r'
            | '\n'
            | '.'
            | ','
            | '|'
            | ':'
            | ')'
            | '('
            | '['
            | ']'
            | '{'
            | '}'
            | '+'
            | '-'
            | '/'
            | '*'
    )
}

#[test]
fn test_field_chain() {
    let kinds: Vec<TokenKind> = Lexer::new(".a.b[1]").map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Field,
            TokenKind::Field,
            TokenKind::BeginArray,
            TokenKind::Number,
            TokenKind::EndArray,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_exhausted_after_error() {
    let mut lexer = Lexer::new("?.foo");
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error(LexError::BadCharacter('?'))
    );
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    assert!(lexer.next().is_none());
}
