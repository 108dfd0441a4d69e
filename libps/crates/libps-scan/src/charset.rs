//! Character classification for the scanner.
//!
//! The format uses a fixed 8-bit symbol set, so every check here is a plain
//! byte comparison. Nothing is Unicode-aware.

/// Checks if a byte is white space.
///
/// Only space, tab, line feed and carriage return separate tokens. Form
/// feed and NUL are regular characters.
///
/// # Example
///
/// ```
/// use libps_scan::charset::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(b'\r'));
/// assert!(!is_whitespace(b'a'));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Checks if a byte is one of the ten delimiter characters.
///
/// # Example
///
/// ```
/// use libps_scan::charset::is_delimiter;
///
/// assert!(is_delimiter(b'('));
/// assert!(is_delimiter(b'%'));
/// assert!(!is_delimiter(b'#'));
/// ```
#[inline]
pub fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Checks if a byte can be part of a name or numeral.
///
/// Anything that is neither white space nor a delimiter is regular.
#[inline]
pub fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

/// Checks if a byte is an octal digit.
#[inline]
pub fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Checks if a byte can open a numeral: a minus sign, a digit, or a point.
#[inline]
pub fn is_numeric_start(b: u8) -> bool {
    b == b'-' || b == b'.' || b.is_ascii_digit()
}
