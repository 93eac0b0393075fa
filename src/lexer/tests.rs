//! Unit tests for the lexer module.
//!
//! Covers classification, positions across whitespace and newlines, the
//! `=`/`==` lookahead and the peek/pop contract.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

fn token(kind: TokenKind, line: usize, column: usize, value: &str) -> Token {
    Token {
        kind,
        line,
        column,
        value: value.to_string(),
        error: None,
    }
}

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.as_bytes()).unwrap()
}

#[test]
fn test_tokenize_operators_across_lines() {
    let tokens = lex("+ + +\n + + +");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Operator, 1, 1, "+"),
            token(TokenKind::Operator, 1, 3, "+"),
            token(TokenKind::Operator, 1, 5, "+"),
            token(TokenKind::Operator, 2, 2, "+"),
            token(TokenKind::Operator, 2, 4, "+"),
            token(TokenKind::Operator, 2, 6, "+"),
        ]
    );
}

#[test]
fn test_tokenize_mixed() {
    let tokens = lex("+ = == hello\nworld ==");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Operator, 1, 1, "+"),
            token(TokenKind::Assignment, 1, 3, "="),
            token(TokenKind::Equality, 1, 5, "=="),
            token(TokenKind::Identifier, 1, 8, "hello"),
            token(TokenKind::Identifier, 2, 1, "world"),
            token(TokenKind::Equality, 2, 7, "=="),
        ]
    );
}

#[test]
fn test_tokenize_empty() {
    assert!(lex("").is_empty());
    assert!(lex(" \t\n\n  ").is_empty());
}

#[test]
fn test_assignment_keeps_following_character() {
    let tokens = lex("=x");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Assignment, 1, 1, "="),
            token(TokenKind::Identifier, 1, 2, "x"),
        ]
    );
}

#[test]
fn test_assignment_followed_by_operator() {
    let tokens = lex("=+");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Assignment, 1, 1, "="),
            token(TokenKind::Operator, 1, 2, "+"),
        ]
    );
}

#[test]
fn test_trailing_assignment() {
    assert_eq!(lex("a ="), vec![
        token(TokenKind::Identifier, 1, 1, "a"),
        token(TokenKind::Assignment, 1, 3, "="),
    ]);
}

#[test]
fn test_equality_is_greedy() {
    let tokens = lex("===");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Equality, 1, 1, "=="),
            token(TokenKind::Assignment, 1, 3, "="),
        ]
    );
}

#[test]
fn test_symbol_followed_by_word() {
    let tokens = lex("+a ==b");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Operator, 1, 1, "+"),
            token(TokenKind::Identifier, 1, 2, "a"),
            token(TokenKind::Equality, 1, 4, "=="),
            token(TokenKind::Identifier, 1, 6, "b"),
        ]
    );
}

#[test]
fn test_word_swallows_symbols() {
    let tokens = lex("a+b c=d");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, 1, 1, "a+b"),
            token(TokenKind::Identifier, 1, 5, "c=d"),
        ]
    );
}

#[test]
fn test_newline_inside_whitespace_run() {
    let tokens = lex("one \t \n\t  \n   two\t\nthree");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, 1, 1, "one"),
            token(TokenKind::Identifier, 3, 4, "two"),
            token(TokenKind::Identifier, 4, 1, "three"),
        ]
    );
}

#[test]
fn test_tab_counts_as_one_column() {
    assert_eq!(lex("\t+"), vec![token(TokenKind::Operator, 1, 2, "+")]);
}

#[test]
fn test_multibyte_columns_count_characters() {
    let tokens = lex("héllo wörld");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, 1, 1, "héllo"),
            token(TokenKind::Identifier, 1, 7, "wörld"),
        ]
    );
}

#[test]
fn test_carriage_return_is_part_of_word() {
    let tokens = lex("a\r\nb");

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, 1, 1, "a\r"),
            token(TokenKind::Identifier, 2, 1, "b"),
        ]
    );
}

#[test]
fn test_peek_is_idempotent() {
    let mut lexer = Lexer::from_source("foo +");

    let first = lexer.peek();
    assert_eq!(first, token(TokenKind::Identifier, 1, 1, "foo"));
    assert_eq!(lexer.peek(), first);
    assert_eq!(lexer.peek(), first);

    assert_eq!(lexer.pop(), first);
    assert_eq!(lexer.peek(), token(TokenKind::Operator, 1, 5, "+"));
}

#[test]
fn test_sentinel_after_exhaustion() {
    let mut lexer = Lexer::from_source("x");

    assert_eq!(lexer.pop().value, "x");
    for _ in 0..3 {
        assert_eq!(lexer.peek(), Token::default());
        assert_eq!(lexer.pop(), Token::default());
    }
}

#[test]
fn test_empty_source_sentinel() {
    let mut lexer = Lexer::from_source("");
    let sentinel = lexer.pop();

    assert_eq!(sentinel.kind, TokenKind::Unknown);
    assert!(sentinel.value.is_empty());
    assert_eq!((sentinel.line, sentinel.column), (0, 0));
    assert!(sentinel.is_sentinel());
}

#[test]
fn test_iterator_stops_at_sentinel() {
    let kinds: Vec<TokenKind> = Lexer::from_source("a = b == c + d")
        .map(|token| token.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Equality,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_token_display() {
    assert_eq!(
        token(TokenKind::Equality, 2, 7, "==").to_string(),
        "Equality \"==\"@2:7"
    );
}

#[test]
fn test_token_is_one_of_many() {
    let t = token(TokenKind::Assignment, 1, 1, "=");

    assert!(t.is_one_of_many(&[TokenKind::Equality, TokenKind::Assignment]));
    assert!(!t.is_one_of_many(&[TokenKind::Identifier]));
}
