//! Byte classifiers and digit-value converters for the literal grammar.
//!
//! Converters assume the caller classified the byte first; anything outside the class maps to 0.

#[inline]
pub fn is_decimal_digit(ch: u8) -> bool {
    matches!(ch, b'0'..=b'9')
}

#[inline]
pub fn is_lower_hex_digit(ch: u8) -> bool {
    matches!(ch, b'a'..=b'f')
}

#[inline]
pub fn is_upper_hex_digit(ch: u8) -> bool {
    matches!(ch, b'A'..=b'F')
}

#[inline]
pub fn is_hex_digit(ch: u8) -> bool {
    is_decimal_digit(ch) || is_lower_hex_digit(ch) || is_upper_hex_digit(ch)
}

#[inline]
pub fn is_binary_digit(ch: u8) -> bool {
    matches!(ch, b'0' | b'1')
}

#[inline]
pub fn decimal_value(ch: u8) -> u8 {
    if is_decimal_digit(ch) { ch - b'0' } else { 0 }
}

#[inline]
pub fn hex_value(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'f' => ch - b'a' + 10,
        b'A'..=b'F' => ch - b'A' + 10,
        _ => 0,
    }
}

#[inline]
pub fn binary_value(ch: u8) -> u8 {
    if is_binary_digit(ch) { ch - b'0' } else { 0 }
}
