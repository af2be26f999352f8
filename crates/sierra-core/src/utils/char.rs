//! Byte classification for numeric text.

/// ASCII `0`-`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Sign, decimal point or exponent marker.
#[inline]
pub const fn is_numeric_mark(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Any byte that may appear in a decimal number: digits, `+ - . e E`.
#[inline]
pub const fn is_numerical(b: u8) -> bool {
    is_digit(b) || is_numeric_mark(b)
}
