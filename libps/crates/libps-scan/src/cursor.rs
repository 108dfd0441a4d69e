//! Byte cursor over a sequential input source.
//!
//! This module provides the `Cursor` struct which pulls bytes from any
//! [`Read`] implementation one at a time, keeps a single byte of lookahead,
//! and tracks line/column information for error reporting. It never seeks.

use std::fmt;
use std::io::{self, BufReader, Bytes, Read};

/// A position in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the input.
    pub offset: u64,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in bytes).
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor for traversing input byte by byte.
///
/// # Example
///
/// ```
/// use libps_scan::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab".as_bytes());
/// assert_eq!(cursor.peek().unwrap(), Some(b'a'));
/// assert_eq!(cursor.bump().unwrap(), Some(b'a'));
/// assert_eq!(cursor.bump().unwrap(), Some(b'b'));
/// assert_eq!(cursor.bump().unwrap(), None);
/// ```
pub struct Cursor<R> {
    /// The input, buffered so single-byte reads stay cheap.
    bytes: Bytes<BufReader<R>>,

    /// One byte of lookahead. `Some(None)` records that the input is exhausted.
    peeked: Option<Option<u8>>,

    /// Number of bytes consumed so far.
    offset: u64,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<R: Read> Cursor<R> {
    /// Creates a new cursor positioned before the first byte of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            peeked: None,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next byte without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.peeked {
            return Ok(b);
        }
        let next = self.bytes.next().transpose()?;
        self.peeked = Some(next);
        Ok(next)
    }

    /// Consumes and returns the next byte, or `None` at end of input.
    ///
    /// Updates line and column tracking.
    pub fn bump(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek()?;
        if let Some(b) = b {
            self.peeked = None;
            self.offset = self.offset.saturating_add(1);
            if b == b'\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
        Ok(b)
    }

    /// Consumes the next byte if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use libps_scan::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<~".as_bytes());
    /// assert!(cursor.eat(b'<').unwrap());
    /// assert!(!cursor.eat(b'<').unwrap());
    /// assert!(cursor.eat(b'~').unwrap());
    /// ```
    pub fn eat(&mut self, expected: u8) -> io::Result<bool> {
        if self.peek()? == Some(expected) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns true once every byte has been consumed.
    pub fn is_at_end(&mut self) -> io::Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Returns the location of the next byte to be consumed.
    pub fn location(&self) -> Location {
        Location {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device on fire"))
        }
    }

    #[test]
    fn test_new_cursor() {
        let mut cursor = Cursor::new("abc".as_bytes());
        assert_eq!(cursor.peek().unwrap(), Some(b'a'));
        assert_eq!(cursor.location(), Location { offset: 0, line: 1, column: 1 });
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new("a".as_bytes());
        assert_eq!(cursor.peek().unwrap(), Some(b'a'));
        assert_eq!(cursor.peek().unwrap(), Some(b'a'));
        assert_eq!(cursor.location().offset, 0);
    }

    #[test]
    fn test_bump_to_end() {
        let mut cursor = Cursor::new("ab".as_bytes());
        assert_eq!(cursor.bump().unwrap(), Some(b'a'));
        assert_eq!(cursor.bump().unwrap(), Some(b'b'));
        assert!(cursor.is_at_end().unwrap());
        assert_eq!(cursor.bump().unwrap(), None);
        assert_eq!(cursor.bump().unwrap(), None);
        assert_eq!(cursor.location().offset, 2);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("~>".as_bytes());
        assert!(!cursor.eat(b'>').unwrap());
        assert!(cursor.eat(b'~').unwrap());
        assert!(cursor.eat(b'>').unwrap());
        assert!(!cursor.eat(b'>').unwrap());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\r\ne".as_bytes());
        cursor.bump().unwrap();
        cursor.bump().unwrap();
        assert_eq!(cursor.column(), 3);

        cursor.bump().unwrap(); // '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);

        for _ in 0..4 {
            cursor.bump().unwrap(); // "cd\r\n"
        }
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.location().offset, 7);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("".as_bytes());
        assert!(cursor.is_at_end().unwrap());
        assert_eq!(cursor.bump().unwrap(), None);
        assert_eq!(cursor.location(), Location { offset: 0, line: 1, column: 1 });
    }

    #[test]
    fn test_high_bytes_pass_through() {
        let mut cursor = Cursor::new(&[0xFFu8, 0x80][..]);
        assert_eq!(cursor.bump().unwrap(), Some(0xFF));
        assert_eq!(cursor.bump().unwrap(), Some(0x80));
    }

    #[test]
    fn test_read_error_propagates() {
        let mut cursor = Cursor::new(FailingReader);
        let err = cursor.peek().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_counters_saturate() {
        let mut cursor = Cursor::new("ab\n".as_bytes());
        cursor.line = u32::MAX;
        cursor.column = u32::MAX - 1;
        cursor.bump().unwrap();
        cursor.bump().unwrap();
        assert_eq!(cursor.column(), u32::MAX);

        cursor.bump().unwrap(); // '\n'
        assert_eq!(cursor.line(), u32::MAX);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_location_display() {
        let loc = Location { offset: 10, line: 4, column: 2 };
        assert_eq!(loc.to_string(), "4:2");
    }
}
