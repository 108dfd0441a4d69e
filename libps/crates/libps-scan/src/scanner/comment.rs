//! White space and comment skipping.

use std::io::Read;

use crate::charset::is_whitespace;
use crate::error::ScanResult;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Skips white space and comments.
    ///
    /// A comment runs from `%` up to, but not including, the next line
    /// break or the end of input. Its content is not interpreted. Called
    /// before every token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> ScanResult<()> {
        while let Some(b) = self.cursor.peek()? {
            if is_whitespace(b) {
                self.cursor.bump()?;
            } else if b == b'%' {
                self.skip_comment()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) -> ScanResult<()> {
        while let Some(b) = self.cursor.peek()? {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.cursor.bump()?;
        }
        Ok(())
    }
}
