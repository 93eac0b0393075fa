use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::Error, Position};

lazy_static! {
    /// Characters that start a symbol token on their own.
    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Operator);
        map.insert('=', TokenKind::Assignment);
        map
    };

    /// Two-character symbols, keyed by (leading, following) character.
    /// Checked against the uncommitted lookahead before a symbol is committed.
    pub static ref COMPOUND_LOOKUP: HashMap<(char, char), TokenKind> = {
        let mut map = HashMap::new();
        map.insert(('=', '='), TokenKind::Equality);
        map
    };
}

/// Whitespace separates words and is never part of a token.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TokenKind {
    #[default]
    Unknown,
    Operator,   // +
    Equality,   // ==
    Assignment, // =
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified piece of source text.
///
/// `Token::default()` is the end-of-stream sentinel: kind `Unknown`, empty
/// value, position 0:0 and no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    pub value: String,
    pub error: Option<Error>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}@{}", self.kind, self.value, self.position())
    }
}

impl Token {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// True for the clean end-of-stream token, false for anything else,
    /// including an `Unknown` token that carries an error.
    pub fn is_sentinel(&self) -> bool {
        self.kind == TokenKind::Unknown && self.error.is_none()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
