use std::{
    char::REPLACEMENT_CHARACTER,
    collections::VecDeque,
    io::{self, BufReader, ErrorKind, Read},
};

use tracing::warn;

use crate::Position;

/// Forward-only UTF-8 character cursor over a byte source.
///
/// `line`/`column` always describe `current`. One character past `current`
/// can be inspected with `peek_next` without committing to it.
pub struct SourceCursor<R: Read> {
    reader: BufReader<R>,
    // bytes read while decoding a malformed sequence, handed back in order
    pending: VecDeque<u8>,
    current: Option<char>,
    next: Option<Option<char>>,
    line: usize,
    column: usize,
    error: Option<io::Error>,
    exhausted: bool,
}

impl<R: Read> SourceCursor<R> {
    pub fn new(reader: R) -> Self {
        let mut cursor = SourceCursor {
            reader: BufReader::new(reader),
            pending: VecDeque::new(),
            current: None,
            next: None,
            line: 1,
            column: 1,
            error: None,
            exhausted: false,
        };
        cursor.current = cursor.read_char();
        cursor
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Commits the current character and moves to the next one.
    /// Returns whether a character is now current. At the end of the source
    /// the position is left one column past the last character.
    pub fn bump(&mut self) -> bool {
        if self.current.is_some() {
            self.column += 1;
        }

        self.current = match self.next.take() {
            Some(next) => next,
            None => self.read_char(),
        };

        self.current.is_some()
    }

    /// The character after `current`, read lazily and left uncommitted.
    pub fn peek_next(&mut self) -> Option<char> {
        if self.next.is_none() {
            self.next = Some(self.read_char());
        }

        self.next.flatten()
    }

    /// Moves to column 0 of the following line; the next `bump` lands on column 1.
    pub fn newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// The read failure that ended the stream, if any. Handed out once.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.pop_front() {
            return Some(byte);
        }

        if self.exhausted {
            return None;
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => return Some(buf[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(line = self.line, column = self.column, error = %err, "source read failed");
                    self.error = Some(err);
                    self.exhausted = true;
                    return None;
                }
            }
        }
    }

    fn read_char(&mut self) -> Option<char> {
        let lead = self.read_byte()?;
        let width = utf8_width(lead);

        match width {
            0 => return Some(REPLACEMENT_CHARACTER),
            1 => return Some(lead as char),
            _ => {}
        }

        let mut buf = [lead, 0, 0, 0];
        let mut filled = 1;
        while filled < width {
            match self.read_byte() {
                Some(byte) => {
                    buf[filled] = byte;
                    filled += 1;
                }
                None => break,
            }
        }

        let decoded = std::str::from_utf8(&buf[..filled])
            .ok()
            .and_then(|s| s.chars().next());

        match decoded {
            Some(c) => Some(c),
            None => {
                // only the lead byte is dropped, the rest is decoded again
                for &byte in buf[1..filled].iter().rev() {
                    self.pending.push_front(byte);
                }
                Some(REPLACEMENT_CHARACTER)
            }
        }
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
