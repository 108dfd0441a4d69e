//! Name scanning.

use std::io::Read;

use crate::charset::is_regular;
use crate::error::ScanResult;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans an executable name.
    ///
    /// A name is the maximal run of regular bytes, so `$MyDict`, `@pattern`
    /// and `13-456` are all names.
    pub(crate) fn scan_name(&mut self) -> ScanResult<Token> {
        let text = self.read_regular_run()?;
        Ok(Token::new(TokenKind::Name, text))
    }

    /// Consumes the maximal run of regular bytes and returns it as text.
    ///
    /// Stops before the first white space byte, delimiter, or end of input.
    /// Each byte maps to the code point of the same value.
    pub(crate) fn read_regular_run(&mut self) -> ScanResult<String> {
        let mut text = String::new();
        while let Some(b) = self.cursor.peek()? {
            if !is_regular(b) {
                break;
            }
            text.push(char::from(b));
            self.cursor.bump()?;
        }
        Ok(text)
    }
}
