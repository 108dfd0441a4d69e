//! Numeral scanning.
//!
//! Numerals are recognized speculatively: the scanner consumes the whole
//! regular run and then classifies it. A run that matches no numeral shape
//! becomes a name, so this path never fails on content.

use std::io::Read;

use crate::error::ScanResult;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans a numeral, falling back to a name.
    ///
    /// # Number Formats
    ///
    /// - Radix: `2#1000`, `16#FFFE`, `16#fffe`
    /// - Real: `.1`, `-.1`, `1.5`, `1.2E7`, `-1.2e-7`
    /// - Integer: `1`, `-1`, `1234567890`
    ///
    /// # Returns
    ///
    /// A token of kind `Radix`, `Real`, `Integer`, or `Name`, holding the
    /// scanned text verbatim.
    pub(crate) fn scan_number(&mut self) -> ScanResult<Token> {
        let text = self.read_regular_run()?;
        let kind = classify_numeral(&text).unwrap_or_else(|| {
            log::debug!("'{}' is not a numeral, scanning as a name", text);
            TokenKind::Name
        });
        Ok(Token::new(kind, text))
    }
}

/// Classifies a complete regular run as a numeral.
///
/// Forms are tried longest first: radix, then real, then integer. Returns
/// `None` if the text matches none of them.
///
/// # Example
///
/// ```
/// use libps_scan::{classify_numeral, TokenKind};
///
/// assert_eq!(classify_numeral("16#ffFE"), Some(TokenKind::Radix));
/// assert_eq!(classify_numeral("-1.2e-7"), Some(TokenKind::Real));
/// assert_eq!(classify_numeral("-42"), Some(TokenKind::Integer));
/// assert_eq!(classify_numeral("1x0"), None);
/// ```
pub fn classify_numeral(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if is_radix(bytes) {
        Some(TokenKind::Radix)
    } else if is_real(bytes) {
        Some(TokenKind::Real)
    } else if is_integer(bytes) {
        Some(TokenKind::Integer)
    } else {
        None
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

fn strip_minus(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"-").unwrap_or(bytes)
}

/// `base#digits`. The digits are not checked against the base.
fn is_radix(bytes: &[u8]) -> bool {
    let Some(hash) = bytes.iter().position(|&b| b == b'#') else {
        return false;
    };
    let (base, digits) = (&bytes[..hash], &bytes[hash + 1..]);
    all_digits(base) && !digits.is_empty() && digits.iter().all(u8::is_ascii_alphanumeric)
}

/// `-?digits*.digits+([eE][+-]?digits+)?`. The fraction cannot be empty.
fn is_real(bytes: &[u8]) -> bool {
    let rest = strip_minus(bytes);
    let int_len = digit_run(rest);
    let Some(rest) = rest[int_len..].strip_prefix(b".") else {
        return false;
    };
    let frac_len = digit_run(rest);
    if frac_len == 0 {
        return false;
    }

    match rest[frac_len..].split_first() {
        None => true,
        Some((b'e' | b'E', exponent)) => {
            let exponent = exponent
                .strip_prefix(b"-")
                .or_else(|| exponent.strip_prefix(b"+"))
                .unwrap_or(exponent);
            all_digits(exponent)
        },
        Some(_) => false,
    }
}

fn is_integer(bytes: &[u8]) -> bool {
    all_digits(strip_minus(bytes))
}
