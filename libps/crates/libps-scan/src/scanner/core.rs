//! Core scanner implementation.
//!
//! This module contains the Scanner struct and its dispatch loop.

use std::io::Read;

use crate::charset::is_numeric_start;
use crate::cursor::{Cursor, Location};
use crate::error::ScanResult;
use crate::token::{Token, TokenKind};

/// Scanner for PostScript-style page descriptions.
///
/// The scanner pulls bytes from its reader and hands out one token per call
/// to [`read_token`](Scanner::read_token). It skips white space and comments,
/// then dispatches on the first significant byte.
///
/// # Example
///
/// ```
/// use libps_scan::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("myInt 1234567890".as_bytes());
///
/// let name = scanner.read_token().unwrap().unwrap();
/// assert_eq!(name.kind(), TokenKind::Name);
/// assert_eq!(name.value(), "myInt");
///
/// let int = scanner.read_token().unwrap().unwrap();
/// assert_eq!(int.kind(), TokenKind::Integer);
///
/// assert!(scanner.read_token().unwrap().is_none());
/// ```
pub struct Scanner<R> {
    /// Byte cursor over the input.
    pub(crate) cursor: Cursor<R>,

    /// Where the token currently being scanned began.
    pub(crate) token_start: Location,

    /// Set once a read has failed; the iterator stops yielding after this.
    failed: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a new scanner over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
            token_start: Location::default(),
            failed: false,
        }
    }

    /// Returns the next token from the input.
    ///
    /// This is the main entry point for scanning.
    ///
    /// # Returns
    /// `Ok(Some(token))` for each token, `Ok(None)` once the input holds
    /// nothing but white space and comments, or an error for malformed input
    /// and read failures. After an error the scan position is unspecified
    /// and the scanner should be dropped.
    pub fn read_token(&mut self) -> ScanResult<Option<Token>> {
        let result = self.scan_token();
        match &result {
            Ok(Some(token)) => log::trace!("{} at {}", token, self.token_start),
            Ok(None) => log::trace!("end of input at {}", self.cursor.location()),
            Err(err) => {
                self.failed = true;
                log::debug!("scan failed: {}", err);
            },
        }
        result
    }

    fn scan_token(&mut self) -> ScanResult<Option<Token>> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.location();

        let Some(b) = self.cursor.peek()? else {
            return Ok(None);
        };

        let token = match b {
            b'(' => self.scan_literal_string()?,
            b'<' => self.scan_angle_bracket()?,
            b'>' => self.scan_dict_end()?,
            b'/' => self.scan_literal_name()?,
            b'[' => self.scan_single(TokenKind::ArrayStart, "[")?,
            b']' => self.scan_single(TokenKind::ArrayEnd, "]")?,
            b'{' => self.scan_single(TokenKind::ProcStart, "{")?,
            b'}' => self.scan_single(TokenKind::ProcEnd, "}")?,
            b')' => self.scan_stray_delimiter(")")?,
            b if is_numeric_start(b) => self.scan_number()?,
            _ => self.scan_name()?,
        };

        Ok(Some(token))
    }

    /// Returns the location where the most recent token began.
    pub fn token_start(&self) -> Location {
        self.token_start
    }

    /// Returns the location of the next byte to be scanned.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.read_token().transpose()
    }
}

/// Scans `reader` to the end, returning every token or the first error.
///
/// # Example
///
/// ```
/// use libps_scan::{tokenize, TokenKind};
///
/// let tokens = tokenize("/x 3.5 def".as_bytes()).unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].kind(), TokenKind::LitName);
/// assert_eq!(tokens[1].kind(), TokenKind::Real);
/// ```
pub fn tokenize<R: Read>(reader: R) -> ScanResult<Vec<Token>> {
    Scanner::new(reader).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::token::StringSyntax;

    fn scan_all(source: &str) -> Vec<Token> {
        tokenize(source.as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_source() {
        let mut scanner = Scanner::new("".as_bytes());
        assert!(scanner.read_token().unwrap().is_none());
    }

    #[test]
    fn test_end_of_input_is_stable() {
        let mut scanner = Scanner::new("x".as_bytes());
        assert!(scanner.read_token().unwrap().is_some());
        assert!(scanner.read_token().unwrap().is_none());
        assert!(scanner.read_token().unwrap().is_none());
    }

    #[test]
    fn test_dispatch() {
        let kinds: Vec<TokenKind> = scan_all("abc 12 (s) <ab> <~a~> /n [ ] { } << >>")
            .iter()
            .map(Token::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Name,
                TokenKind::Integer,
                TokenKind::LitString(StringSyntax::Literal),
                TokenKind::LitString(StringSyntax::Hex),
                TokenKind::LitString(StringSyntax::Base85),
                TokenKind::LitName,
                TokenKind::ArrayStart,
                TokenKind::ArrayEnd,
                TokenKind::ProcStart,
                TokenKind::ProcEnd,
                TokenKind::DictStart,
                TokenKind::DictEnd,
            ]
        );
    }

    #[test]
    fn test_tokens_without_separating_whitespace() {
        let tokens = scan_all("[1(a)2]");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1], Token::new(TokenKind::Integer, "1"));
        assert_eq!(tokens[3], Token::new(TokenKind::Integer, "2"));
    }

    #[test]
    fn test_stray_close_paren() {
        let mut scanner = Scanner::new("  )".as_bytes());
        let token = scanner.read_token().unwrap();
        assert_eq!(token, Some(Token::new(TokenKind::Name, ")")));
        assert_eq!(scanner.token_start().column, 3);
        assert!(scanner.read_token().unwrap().is_none());
    }

    #[test]
    fn test_token_start_tracking() {
        let mut scanner = Scanner::new("a\n  bc".as_bytes());
        scanner.read_token().unwrap();
        assert_eq!(scanner.token_start().line, 1);
        assert_eq!(scanner.token_start().column, 1);

        scanner.read_token().unwrap();
        assert_eq!(scanner.token_start().line, 2);
        assert_eq!(scanner.token_start().column, 3);
        assert_eq!(scanner.location().column, 5);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut scanner = Scanner::new("a (open".as_bytes());
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_tokenize_reports_first_error() {
        let result = tokenize("1 2 (abc".as_bytes());
        assert!(matches!(result, Err(ScanError::UnterminatedString { .. })));
    }
}
