//! Lexical analysis module.
//!
//! Converts a character source into a stream of positioned tokens on demand:
//!
//! - Character cursor with line/column tracking and one character of lookahead
//! - Classification of `+`, `=`, `==` and whitespace-delimited words
//! - Single-token lookahead through `Lexer::peek`

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
