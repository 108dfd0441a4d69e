//! libps-scan - Lexical Scanner for PostScript-style Page Descriptions
//!
//! This crate turns a byte stream into a sequence of typed tokens. It does
//! lexical recognition and syntax-level normalization only: building arrays,
//! procedures, and dictionaries, decoding hex or base-85 strings into bytes,
//! and evaluating radix numerals are all left to the consumer.
//!
//! # Example Usage
//!
//! ```
//! use libps_scan::{Scanner, Token, TokenKind};
//!
//! let source = "/x 16#FF def (hi\\n)";
//! let mut scanner = Scanner::new(source.as_bytes());
//!
//! // Pull tokens one at a time; `None` marks the end of input.
//! while let Some(token) = scanner.read_token().unwrap() {
//!     println!("{}", token);
//! }
//!
//! // Or iterate.
//! let tokens: Vec<Token> = Scanner::new(source.as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[1].kind(), TokenKind::Radix);
//! assert_eq!(tokens[3].value(), "hi\n");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Scanner implementation
//! - [`cursor`] - Byte cursor with one byte of lookahead
//! - [`charset`] - Byte classification
//! - [`error`] - Scan errors
//!
//! # Token Categories
//!
//! ## Names
//!
//! A maximal run of regular characters that is not a numeral: `moveto`,
//! `$MyDict`, `13-456`. Slash-prefixed names (`/name`, `//name`) are their
//! own kinds.
//!
//! ## Numerals
//!
//! - **Integer**: `42`, `-7`
//! - **Real**: `.5`, `-3.14`, `1.2e-7`
//! - **Radix**: `16#FFFE`, `2#1000`
//!
//! Values are the source text, unconverted.
//!
//! ## Strings
//!
//! - **Literal**: `(text)` with escapes resolved
//! - **Hex**: `<DEADBEEF>` with white space dropped and odd length padded
//! - **Base-85**: `<~...~>` with delimiters stripped
//!
//! ## Delimiters
//!
//! `[` `]` `{` `}` `<<` `>>`
//!
//! # Errors
//!
//! End of input is `Ok(None)`, never an error. Only an unterminated `( ... )`
//! literal and a failing reader produce a [`ScanError`]. Everything else
//! degrades: a stray `)` or `>` is a one-character name, and hex or base-85
//! literals left open at end of input keep what was read.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Location};
pub use error::{ScanError, ScanResult};
pub use scanner::{classify_numeral, tokenize, Scanner};
pub use token::{StringSyntax, Token, TokenKind};
