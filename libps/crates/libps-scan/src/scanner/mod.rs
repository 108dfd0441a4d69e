//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct and dispatch on the first significant byte
//! - `comment` - White space and `%` comment skipping
//! - `number` - Integer, real, and radix numerals with name fallback
//! - `name` - Executable names
//! - `string` - Parenthesized, hex, and base-85 string literals
//! - `delimiter` - Brackets, braces, dictionary markers, and literal names

mod comment;
mod core;
mod delimiter;
mod name;
mod number;
mod string;

pub use self::core::{tokenize, Scanner};
pub use self::number::classify_numeral;
