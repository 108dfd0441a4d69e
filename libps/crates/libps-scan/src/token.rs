//! Token definitions.
//!
//! A [`Token`] is an immutable `(kind, value)` pair. For names and numerals
//! the value is the source text exactly as scanned; for string literals it is
//! the normalized interior text (see [`StringSyntax`]).

use std::fmt;

/// The syntax a string literal was written in.
///
/// All three produce a [`TokenKind::LitString`]; the tag tells a later decode
/// stage which decoder to apply to the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringSyntax {
    /// `(...)` with backslash escapes already resolved.
    Literal,
    /// `<...>` holding hex digits, whitespace removed, padded to even length.
    Hex,
    /// `<~...~>` holding raw base-85 text with the delimiters stripped.
    Base85,
}

/// The lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An executable name such as `moveto` or `$MyDict`.
    Name,
    /// A signed decimal integer, e.g. `-42`.
    Integer,
    /// A real number, e.g. `-1.2e-7`.
    Real,
    /// A radix numeral, e.g. `16#FFFE`.
    Radix,
    /// A string literal in one of the three string syntaxes.
    LitString(StringSyntax),
    /// A literal name, `/name`. The value excludes the slash.
    LitName,
    /// An immediately evaluated name, `//name`. The value excludes the slashes.
    ImmediateName,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `{`
    ProcStart,
    /// `}`
    ProcEnd,
    /// `<<`
    DictStart,
    /// `>>`
    DictEnd,
}

impl TokenKind {
    /// Returns true for any of the three string literal syntaxes.
    pub fn is_lit_string(&self) -> bool {
        matches!(self, TokenKind::LitString(_))
    }

    /// Returns true for integer, real, and radix numerals.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Real | TokenKind::Radix)
    }

    /// The upper-case name used when printing token streams.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Name => "NAME",
            TokenKind::Integer => "INT",
            TokenKind::Real => "REAL",
            TokenKind::Radix => "RADIX",
            TokenKind::LitString(_) => "LIT_STRING",
            TokenKind::LitName => "LIT_NAME",
            TokenKind::ImmediateName => "IMMEDIATE_NAME",
            TokenKind::ArrayStart => "ARRAY_START",
            TokenKind::ArrayEnd => "ARRAY_END",
            TokenKind::ProcStart => "PROC_START",
            TokenKind::ProcEnd => "PROC_END",
            TokenKind::DictStart => "DICT_START",
            TokenKind::DictEnd => "DICT_END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scanned token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the token, returning its value.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
