// tests/lexer_tests.rs

use fetchpath::ast::{Token, TokenKind};
use fetchpath::lexer::{LexError, Lexer};

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("[", TokenKind::BeginArray),
        ("]", TokenKind::EndArray),
        (".", TokenKind::Dot),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.text, input);
        assert_eq!(token.position, 0);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
}

// ============================================================================
// Fields
// ============================================================================

#[test]
fn test_field_keeps_leading_dot() {
    let toks = tokens(".foo_bar9");
    assert_eq!(toks[0].kind, TokenKind::Field);
    assert_eq!(toks[0].text, ".foo_bar9");
    assert_eq!(toks[1].kind, TokenKind::EndOfInput);
}

#[test]
fn test_field_positions() {
    let toks = tokens(".a.bc[1]");
    let positions: Vec<usize> = toks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 2, 5, 6, 7, 8]);
}

#[test]
fn test_field_starting_with_digit() {
    let toks = tokens(".0");
    assert_eq!(toks[0].kind, TokenKind::Field);
    assert_eq!(toks[0].text, ".0");
}

#[test]
fn test_unicode_field() {
    let toks = tokens(".naïve.ключ");
    assert_eq!(toks[0].text, ".naïve");
    assert_eq!(toks[1].text, ".ключ");
    // Positions count characters, not bytes
    assert_eq!(toks[1].position, 6);
}

#[test]
fn test_field_terminators() {
    for terminator in [" ", "\t", ".", ",", "|", ":", ")", "(", "[", "]", "{", "}", "+", "-", "/", "*"] {
        let input = format!(".foo{}", terminator);
        let first = Lexer::new(&input).next_token();
        assert_eq!(first.kind, TokenKind::Field, "Failed for terminator {:?}", terminator);
        assert_eq!(first.text, ".foo");
    }
}

#[test]
fn test_field_bad_character() {
    let toks = tokens(".arrayObj\"]");
    assert_eq!(
        toks.last().unwrap().kind,
        TokenKind::Error(LexError::BadCharacter('"'))
    );
    assert_eq!(toks.last().unwrap().position, 0);
    assert_eq!(toks.len(), 1);
}

#[test]
fn test_bad_character_message() {
    assert_eq!(
        LexError::BadCharacter('#').to_string(),
        "bad character U+0023 '#'"
    );
}

#[test]
fn test_dot_before_non_identifier() {
    assert_eq!(
        kinds(".[0]"),
        vec![
            TokenKind::Dot,
            TokenKind::BeginArray,
            TokenKind::Number,
            TokenKind::EndArray,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(
        kinds("..."),
        vec![TokenKind::Dot, TokenKind::Dot, TokenKind::Dot, TokenKind::EndOfInput]
    );
}

// ============================================================================
// Quoted Strings
// ============================================================================

#[test]
fn test_double_quoted() {
    let toks = tokens(r#"["bar.baz"]"#);
    assert_eq!(toks[1].kind, TokenKind::QuotedString);
    assert_eq!(toks[1].text, r#""bar.baz""#);
    assert_eq!(toks[2].kind, TokenKind::EndArray);
}

#[test]
fn test_single_quoted() {
    let toks = tokens("['escape.key']");
    assert_eq!(toks[1].kind, TokenKind::QuotedString);
    assert_eq!(toks[1].text, "'escape.key'");
}

#[test]
fn test_escaped_quote_stays_verbatim() {
    let toks = tokens(r#"["a\"b"]"#);
    assert_eq!(toks[1].kind, TokenKind::QuotedString);
    assert_eq!(toks[1].text, r#""a\"b""#);
}

#[test]
fn test_other_quote_inside_string() {
    let toks = tokens(r#"["it's"]"#);
    assert_eq!(toks[1].text, r#""it's""#);
}

#[test]
fn test_unterminated_strings() {
    for input in [r#""jdsjdskdjsjs"#, r#"["foo'"#, "[\"foo\nbar\"]", "[\"foo\\"] {
        let toks = tokens(input);
        assert_eq!(
            toks.last().unwrap().kind,
            TokenKind::Error(LexError::UnterminatedString),
            "Failed for input: {:?}",
            input
        );
    }
}

#[test]
fn test_mismatched_quotes_do_not_close() {
    let toks = tokens(r#"["foo.bar']"#);
    assert_eq!(
        toks.last().unwrap().kind,
        TokenKind::Error(LexError::UnterminatedString)
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_number() {
    let toks = tokens("[123]");
    assert_eq!(toks[1].kind, TokenKind::Number);
    assert_eq!(toks[1].text, "123");
}

#[test]
fn test_number_stops_at_non_digit() {
    assert_eq!(
        kinds("[22!2]"),
        vec![
            TokenKind::BeginArray,
            TokenKind::Number,
            TokenKind::Error(LexError::BadCharacter('!')),
        ]
    );
}

#[test]
fn test_number_too_large() {
    let toks = tokens("[99999999999999999999999999]");
    assert_eq!(
        toks[1].kind,
        TokenKind::Error(LexError::BadNumber("99999999999999999999999999".to_string()))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_characters() {
    for input in ["?", "!", " ", "a", "-1", "$"] {
        let first = Lexer::new(input).next_token();
        assert!(
            matches!(first.kind, TokenKind::Error(LexError::BadCharacter(_))),
            "Failed for input: {:?}",
            input
        );
    }
}

#[test]
fn test_scanning_stops_after_error() {
    let toks = tokens(".a ? .b");
    assert_eq!(toks.len(), 2);
    assert_eq!(toks[0].kind, TokenKind::Field);
    assert_eq!(toks[1].kind, TokenKind::Error(LexError::BadCharacter(' ')));
}

#[test]
fn test_kind_labels() {
    assert_eq!(TokenKind::BeginArray.to_string(), "'['");
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    assert_eq!(
        Token::new(TokenKind::EndOfInput, 4, "").to_string(),
        "end of input"
    );
}
