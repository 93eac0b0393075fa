#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;

/// 1-based line/column of a character in the source.
///
/// A newline counts as column 0 of the line it starts, so the first real
/// character of every line lands on column 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
