//! Delimiter scanning.
//!
//! Brackets, braces, `>>`, and slash-prefixed names. Grouping them into
//! arrays, procedures, or dictionaries is left to the consumer.

use std::io::Read;

use crate::error::ScanResult;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Consumes a one-byte delimiter and returns it as a token of `kind`.
    pub(crate) fn scan_single(&mut self, kind: TokenKind, text: &str) -> ScanResult<Token> {
        self.cursor.bump()?;
        Ok(Token::new(kind, text))
    }

    /// Consumes a closing delimiter that has no opener and returns it as a
    /// one-character name.
    pub(crate) fn scan_stray_delimiter(&mut self, text: &str) -> ScanResult<Token> {
        log::debug!("stray '{}' at {}, scanning as a name", text, self.token_start);
        self.scan_single(TokenKind::Name, text)
    }

    /// Scans `>>`.
    ///
    /// Hex strings consume their own closing `>`, so a `>` not followed by a
    /// second one is stray and becomes the name `>`.
    pub(crate) fn scan_dict_end(&mut self) -> ScanResult<Token> {
        self.cursor.bump()?;
        if self.cursor.eat(b'>')? {
            Ok(Token::new(TokenKind::DictEnd, ">>"))
        } else {
            log::debug!("stray '>' at {}, scanning as a name", self.token_start);
            Ok(Token::new(TokenKind::Name, ">"))
        }
    }

    /// Scans a literal name (`/name`) or an immediate name (`//name`).
    ///
    /// The value is the regular run after the slashes and may be empty.
    pub(crate) fn scan_literal_name(&mut self) -> ScanResult<Token> {
        self.cursor.bump()?;
        let kind = if self.cursor.eat(b'/')? {
            TokenKind::ImmediateName
        } else {
            TokenKind::LitName
        };
        let text = self.read_regular_run()?;
        Ok(Token::new(kind, text))
    }
}
