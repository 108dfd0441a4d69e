//! Common types and utilities for pstok commands.
//!
//! This module provides the output format, input handling, and token
//! rendering shared by the command implementations.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use libps_scan::{Location, StringSyntax, Token, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `KIND value`
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Open an input for scanning.
///
/// `None` and `-` both mean standard input. Returns the name to show in
/// messages along with the reader.
pub fn open_input(path: Option<&Path>) -> Result<(String, Box<dyn Read>)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            Ok((path.display().to_string(), Box::new(file)))
        },
        _ => Ok((STDIN_NAME.to_string(), Box::new(io::stdin()))),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Escape a token value for single-line display.
///
/// Control characters and code points above Latin-1 (octal escapes reach
/// up to 511) are written as three-digit octal escapes, the way they would
/// appear inside a string literal.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() || u32::from(c) > 0xFF => {
                out.push_str(&format!("\\{:03o}", u32::from(c)))
            },
            c => out.push(c),
        }
    }
    out
}

/// Render a token the way it could be written back in source form.
pub fn render_token(token: &Token) -> String {
    let value = escape_value(token.value());
    match token.kind() {
        TokenKind::LitString(StringSyntax::Literal) => {
            format!("({})", value.replace('(', "\\(").replace(')', "\\)"))
        },
        TokenKind::LitString(StringSyntax::Hex) => format!("<{}>", value),
        TokenKind::LitString(StringSyntax::Base85) => format!("<~{}~>", value),
        TokenKind::LitName => format!("/{}", value),
        TokenKind::ImmediateName => format!("//{}", value),
        _ => value,
    }
}

/// Lower-case name of a string syntax, for JSON output.
pub fn syntax_name(syntax: StringSyntax) -> &'static str {
    match syntax {
        StringSyntax::Literal => "literal",
        StringSyntax::Hex => "hex",
        StringSyntax::Base85 => "base85",
    }
}

/// A scanned token prepared for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Token kind, e.g. `NAME` or `LIT_STRING`.
    pub kind: &'static str,

    /// String syntax, present only for string literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<&'static str>,

    /// Token value, unescaped.
    pub value: String,

    /// Line where the token starts, when locations are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Column where the token starts, when locations are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,

    #[serde(skip)]
    rendered: String,
}

impl TokenRecord {
    /// Build a record from a token and the location where it started.
    pub fn new(token: Token, start: Location, show_location: bool) -> Self {
        let kind = token.kind();
        let rendered = render_token(&token);
        let syntax = match kind {
            TokenKind::LitString(syntax) => Some(syntax_name(syntax)),
            _ => None,
        };
        Self {
            kind: kind.as_str(),
            syntax,
            value: token.into_value(),
            line: show_location.then_some(start.line),
            column: show_location.then_some(start.column),
            rendered,
        }
    }

    /// Format the record as one line of text output.
    pub fn to_text(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                format!("{}:{}\t{} {}", line, column, self.kind, self.rendered)
            },
            _ => format!("{} {}", self.kind, self.rendered),
        }
    }
}
