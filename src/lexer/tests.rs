//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer literals, operators and
//! punctuation, illegal characters and token spans.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "let fn function if else return true false".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Function,
            TokenKind::Function,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "fn");
    assert_eq!(tokens[2].value, "function");
    assert!(tokens[..8].iter().all(|token| token.is_keyword()));
    assert!(!tokens[8].is_keyword());
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase letter".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter", "EOF"]
    );
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
    assert!(!tokens[5].is_keyword());
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 100 007".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].value, "007");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_digits_then_letters() {
    let tokens = tokenize("12abc".to_string(), None);

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_operators() {
    let source = "= + - ! * / < > == !=".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d".to_string(), None);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } , ;".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_literal() {
    let source = "let add = fn(x, y) { x + y; };".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Function,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "EOF");
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize(" \t\r\n  ".to_string(), None);

    assert_eq!(kinds(&tokens), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let   x   =\n\t42  ".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters_continue() {
    let source = "let x = @ 5 # y".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Illegal,
            TokenKind::Integer,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[5].value, "#");
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("a é b".to_string(), None);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "é");
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 4);
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("let foo == 10;".to_string(), Some("test.monkey".to_string()));

    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();
    assert_eq!(spans, vec![(0, 3), (4, 7), (8, 10), (11, 13), (13, 14), (14, 14)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.monkey");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo 5 + @".to_string(), None);

    assert_eq!(tokens[0].to_string(), "Identifier(foo)");
    assert_eq!(tokens[1].to_string(), "Integer(5)");
    assert_eq!(tokens[2].to_string(), "Plus");
    assert_eq!(tokens[3].to_string(), "Illegal(@)");
    assert_eq!(tokens[4].to_string(), "EOF");
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "let five = 5; if (five < 10) { return true; } else { return !false; }";

    let first = tokenize(source.to_string(), None);
    let second = tokenize(source.to_string(), None);

    assert_eq!(first, second);
}
