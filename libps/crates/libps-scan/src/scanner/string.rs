//! String literal scanning.
//!
//! This module handles the three string syntaxes. Each produces a
//! `LitString` token tagged with the syntax it came from:
//!
//! - `(...)` - balanced parentheses, backslash escapes resolved
//! - `<...>` - hex digits, white space dropped, padded to even length
//! - `<~...~>` - base-85 text, kept verbatim

use std::io::Read;

use crate::charset::{is_octal_digit, is_whitespace};
use crate::error::{ScanError, ScanResult};
use crate::token::{StringSyntax, Token, TokenKind};
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans a parenthesized string literal.
    ///
    /// Unescaped parentheses nest and are kept as content; the `)` that
    /// closes depth zero ends the token. Raw line breaks are kept exactly as
    /// written.
    ///
    /// # Errors
    ///
    /// `UnterminatedString` if the input ends before the closing `)`.
    pub(crate) fn scan_literal_string(&mut self) -> ScanResult<Token> {
        let start = self.token_start;
        self.cursor.bump()?;

        let mut content = String::new();
        let mut depth = 0u32;

        loop {
            let Some(b) = self.cursor.bump()? else {
                return Err(ScanError::UnterminatedString { start });
            };

            match b {
                b'(' => {
                    depth += 1;
                    content.push('(');
                },
                b')' if depth == 0 => break,
                b')' => {
                    depth -= 1;
                    content.push(')');
                },
                b'\\' => self.scan_escape(&mut content)?,
                _ => content.push(char::from(b)),
            }
        }

        Ok(Token::new(TokenKind::LitString(StringSyntax::Literal), content))
    }

    /// Resolves the escape sequence following a backslash.
    ///
    /// Handles: `\n`, `\r`, `\t`, `\b`, `\f`, `\\`, `\(`, `\)`, `\ddd` and
    /// backslash-newline continuations. Any other escaped character is kept
    /// with the backslash dropped.
    fn scan_escape(&mut self, content: &mut String) -> ScanResult<()> {
        let Some(b) = self.cursor.bump()? else {
            return Err(ScanError::UnterminatedString {
                start: self.token_start,
            });
        };

        match b {
            b'n' => content.push('\n'),
            b'r' => content.push('\r'),
            b't' => content.push('\t'),
            b'b' => content.push('\u{08}'),
            b'f' => content.push('\u{0C}'),
            b'\n' => {},
            b'\r' => {
                self.cursor.eat(b'\n')?;
            },
            b if is_octal_digit(b) => self.scan_octal_escape(b, content)?,
            _ => content.push(char::from(b)),
        }

        Ok(())
    }

    /// Reads up to two more octal digits after `first`.
    ///
    /// Three digits form one code point in 0..=511. With fewer, the digits
    /// are kept as literal text.
    fn scan_octal_escape(&mut self, first: u8, content: &mut String) -> ScanResult<()> {
        let mut digits = [first, 0, 0];
        let mut len = 1;

        while len < digits.len() {
            match self.cursor.peek()? {
                Some(b) if is_octal_digit(b) => {
                    digits[len] = b;
                    len += 1;
                    self.cursor.bump()?;
                },
                _ => break,
            }
        }

        if len == digits.len() {
            let code = digits
                .iter()
                .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
            if let Some(c) = char::from_u32(code) {
                content.push(c);
            }
        } else {
            content.extend(digits[..len].iter().map(|&d| char::from(d)));
        }

        Ok(())
    }

    /// Scans a construct opened by `<`: a dictionary start, a base-85
    /// string, or a hex string.
    pub(crate) fn scan_angle_bracket(&mut self) -> ScanResult<Token> {
        self.cursor.bump()?;

        match self.cursor.peek()? {
            Some(b'<') => {
                self.cursor.bump()?;
                Ok(Token::new(TokenKind::DictStart, "<<"))
            },
            Some(b'~') => {
                self.cursor.bump()?;
                self.scan_base85_string()
            },
            _ => self.scan_hex_string(),
        }
    }

    /// Scans the body of a hex string; the opening `<` is already consumed.
    ///
    /// White space is dropped and other characters are kept verbatim, case
    /// included. An odd digit count is padded with a trailing `0`. End of
    /// input closes the literal with the digits read so far.
    fn scan_hex_string(&mut self) -> ScanResult<Token> {
        let mut digits = String::new();
        let mut count = 0usize;

        loop {
            match self.cursor.bump()? {
                None => {
                    log::debug!("hex string at {} closed by end of input", self.token_start);
                    break;
                },
                Some(b'>') => break,
                Some(b) if is_whitespace(b) => {},
                Some(b) => {
                    digits.push(char::from(b));
                    count += 1;
                },
            }
        }

        if count % 2 == 1 {
            digits.push('0');
        }

        Ok(Token::new(TokenKind::LitString(StringSyntax::Hex), digits))
    }

    /// Scans the body of a base-85 string; `<~` is already consumed.
    ///
    /// Only `~>` terminates, so a lone `>` or `~` is content. End of input
    /// closes the literal with the text read so far.
    fn scan_base85_string(&mut self) -> ScanResult<Token> {
        let mut content = String::new();

        loop {
            match self.cursor.bump()? {
                None => {
                    log::debug!("base85 string at {} closed by end of input", self.token_start);
                    break;
                },
                Some(b'~') => {
                    if self.cursor.eat(b'>')? {
                        break;
                    }
                    content.push('~');
                },
                Some(b) => content.push(char::from(b)),
            }
        }

        Ok(Token::new(TokenKind::LitString(StringSyntax::Base85), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_str(source: &str) -> ScanResult<Token> {
        let mut scanner = Scanner::new(source.as_bytes());
        scanner.scan_literal_string()
    }

    fn lex_angle(source: &str) -> ScanResult<Token> {
        let mut scanner = Scanner::new(source.as_bytes());
        scanner.scan_angle_bracket()
    }

    fn literal(value: &str) -> Token {
        Token::new(TokenKind::LitString(StringSyntax::Literal), value)
    }

    fn hex(value: &str) -> Token {
        Token::new(TokenKind::LitString(StringSyntax::Hex), value)
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_str("(this is a string)").unwrap(), literal("this is a string"));
        assert_eq!(lex_str("()").unwrap(), literal(""));
    }

    #[test]
    fn test_raw_line_breaks_kept() {
        assert_eq!(lex_str("(a\nb)").unwrap(), literal("a\nb"));
        assert_eq!(lex_str("(a\r\nb)").unwrap(), literal("a\r\nb"));
        assert_eq!(lex_str("(a\rb)").unwrap(), literal("a\rb"));
    }

    #[test]
    fn test_nested_parens() {
        assert_eq!(lex_str("(a(b)c)").unwrap(), literal("a(b)c"));
        assert_eq!(lex_str("(((x)))").unwrap(), literal("((x))"));
    }

    #[test]
    fn test_escaped_parens_do_not_nest() {
        assert_eq!(lex_str("(a\\(b)").unwrap(), literal("a(b"));
        assert_eq!(lex_str("(\\))").unwrap(), literal(")"));
    }

    #[test]
    fn test_escape_table() {
        let cases = [
            ("(\\n)", "\n"),
            ("(\\r)", "\r"),
            ("(\\t)", "\t"),
            ("(\\b)", "\u{08}"),
            ("(\\f)", "\u{0C}"),
            ("(\\\\)", "\\"),
            ("(\\()", "("),
            ("(\\))", ")"),
        ];
        for (source, expected) in cases {
            assert_eq!(lex_str(source).unwrap(), literal(expected), "{:?}", source);
        }
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(lex_str("(\\\n)").unwrap(), literal(""));
        assert_eq!(lex_str("(\\\r)").unwrap(), literal(""));
        assert_eq!(lex_str("(\\\r\n)").unwrap(), literal(""));
        assert_eq!(lex_str("(a\\\r\nb)").unwrap(), literal("ab"));
        assert_eq!(lex_str("(a\\\n\nb)").unwrap(), literal("a\nb"));
    }

    #[test]
    fn test_octal_escape() {
        assert_eq!(lex_str("(\\000)").unwrap().value(), "\u{0}");
        assert_eq!(lex_str("(\\101)").unwrap().value(), "A");
        assert_eq!(lex_str("(\\777)").unwrap().value(), "\u{1FF}");
        assert_eq!(lex_str("(\\1234)").unwrap().value(), "S4");
    }

    #[test]
    fn test_short_octal_kept_literally() {
        assert_eq!(lex_str("(\\12a)").unwrap(), literal("12a"));
        assert_eq!(lex_str("(\\7)").unwrap(), literal("7"));
        assert_eq!(lex_str("(\\08)").unwrap(), literal("08"));
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(lex_str("(\\ii)").unwrap(), literal("ii"));
        assert_eq!(lex_str("(\\%)").unwrap(), literal("%"));
    }

    #[test]
    fn test_unterminated_string() {
        for source in ["(this is a string", "(this is a string \\)", "(a\\", "((a)"] {
            assert!(
                matches!(lex_str(source), Err(ScanError::UnterminatedString { .. })),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(lex_angle("<901fa3>").unwrap(), hex("901fa3"));
        assert_eq!(lex_angle("<FFFFFFFF>").unwrap(), hex("FFFFFFFF"));
        assert_eq!(lex_angle("<ffffFFFF>").unwrap(), hex("ffffFFFF"));
        assert_eq!(lex_angle("<>").unwrap(), hex(""));
    }

    #[test]
    fn test_hex_string_padding() {
        assert_eq!(lex_angle("<0>").unwrap(), hex("00"));
        assert_eq!(lex_angle("<901fa>").unwrap(), hex("901fa0"));
    }

    #[test]
    fn test_hex_string_whitespace_dropped() {
        assert_eq!(lex_angle("<90 1f\na>").unwrap(), hex("901fa0"));
        assert_eq!(lex_angle("< DE AD\r\n\tBE EF >").unwrap(), hex("DEADBEEF"));
    }

    #[test]
    fn test_hex_string_content_not_validated() {
        assert_eq!(lex_angle("<xyz>").unwrap(), hex("xyz0"));
    }

    #[test]
    fn test_hex_string_closed_by_end_of_input() {
        assert_eq!(lex_angle("<abc").unwrap(), hex("abc0"));
        assert_eq!(lex_angle("<").unwrap(), hex(""));
        assert_eq!(lex_angle("<DE AD\n").unwrap(), hex("DEAD"));
    }

    #[test]
    fn test_base85_string() {
        let token = lex_angle("<~FD,B0+DGm>F)Po,+EV1>F8~>").unwrap();
        assert_eq!(token.kind(), TokenKind::LitString(StringSyntax::Base85));
        assert_eq!(token.value(), "FD,B0+DGm>F)Po,+EV1>F8");
    }

    #[test]
    fn test_base85_lone_tilde() {
        assert_eq!(lex_angle("<~a~b~~>").unwrap().value(), "a~b~");
        assert_eq!(lex_angle("<~~>").unwrap().value(), "");
    }

    #[test]
    fn test_base85_string_closed_by_end_of_input() {
        let cases = [("<~abc", "abc"), ("<~abc~", "abc~"), ("<~abc>", "abc>"), ("<~", "")];
        for (source, expected) in cases {
            let token = lex_angle(source).unwrap();
            assert_eq!(token.kind(), TokenKind::LitString(StringSyntax::Base85));
            assert_eq!(token.value(), expected, "{:?}", source);
        }
    }

    #[test]
    fn test_dict_start() {
        assert_eq!(lex_angle("<<").unwrap(), Token::new(TokenKind::DictStart, "<<"));
    }
}
