use std::io::Read;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::SourceCursor,
    tokens::{is_whitespace, Token, TokenKind, COMPOUND_LOOKUP, SYMBOL_LOOKUP},
};

/// Pull-based tokenizer over a character source.
///
/// Tokens are scanned lazily, one at a time, and at most one scanned token is
/// held back for `peek`. Once the source is exhausted every call returns the
/// sentinel `Token::default()`.
pub struct Lexer<R: Read> {
    cursor: SourceCursor<R>,
    next: Option<Token>,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer {
            cursor: SourceCursor::new(reader),
            next: None,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        if self.next.is_none() {
            self.advance();
        }

        self.next.clone().unwrap_or_default()
    }

    /// Returns the next token and consumes it.
    pub fn pop(&mut self) -> Token {
        if self.next.is_none() {
            self.advance();
        }

        self.next.take().unwrap_or_default()
    }

    fn advance(&mut self) {
        self.skip_whitespace();

        let start = self.cursor.position();
        let Some(current) = self.cursor.current() else {
            self.next = self.read_failure(start);
            return;
        };

        let token = match SYMBOL_LOOKUP.get(&current) {
            Some(&kind) => self.symbol(current, kind, start),
            None => self.word(start),
        };

        trace!(kind = %token.kind, value = %token.value, line = token.line, column = token.column, "scanned token");
        self.next = Some(token);
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.current() {
            match c {
                '\n' => self.cursor.newline(),
                ' ' | '\t' => {}
                _ => break,
            }
            self.cursor.bump();
        }
    }

    fn symbol(&mut self, first: char, kind: TokenKind, start: Position) -> Token {
        if let Some(second) = self.cursor.peek_next() {
            if let Some(&compound) = COMPOUND_LOOKUP.get(&(first, second)) {
                self.cursor.bump();
                self.cursor.bump();
                return MK_TOKEN!(compound, [first, second].iter().collect(), start);
            }
        }

        // the peeked character stays uncommitted and starts the next token
        self.cursor.bump();
        MK_TOKEN!(kind, first.to_string(), start)
    }

    fn word(&mut self, start: Position) -> Token {
        let mut value = String::new();

        while let Some(c) = self.cursor.current() {
            if is_whitespace(c) {
                break;
            }
            value.push(c);
            self.cursor.bump();
        }

        MK_TOKEN!(TokenKind::Identifier, value, start)
    }

    fn read_failure(&mut self, position: Position) -> Option<Token> {
        match self.cursor.take_error() {
            Some(err) => {
                debug!(line = position.line, column = position.column, "reporting source read failure");
                let mut token = MK_TOKEN!(TokenKind::Unknown, String::new(), position);
                token.error = Some(Error::new(ErrorImpl::from(err), position));
                Some(token)
            }
            None => {
                trace!("source exhausted");
                None
            }
        }
    }
}

impl<'a> Lexer<&'a [u8]> {
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(source.as_bytes())
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    /// Yields tokens until the clean end of the stream. A token carrying an
    /// error is still yielded.
    fn next(&mut self) -> Option<Token> {
        let token = self.pop();

        if token.is_sentinel() {
            None
        } else {
            Some(token)
        }
    }
}

pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>, Error> {
    Lexer::new(reader)
        .map(|token| match token.error {
            Some(err) => Err(err),
            None => Ok(token),
        })
        .collect()
}
