//! Sign and base-prefix detection. Nothing here advances the cursor.

use super::classify::{
    binary_value, decimal_value, hex_value, is_binary_digit, is_decimal_digit, is_hex_digit,
};
use super::source::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    Negative,
    Positive,
    #[default]
    None,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Numeric base selected for the integer part of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    Binary,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn accepts(self, ch: u8) -> bool {
        match self {
            Radix::Binary => is_binary_digit(ch),
            Radix::Decimal => is_decimal_digit(ch),
            Radix::Hexadecimal => is_hex_digit(ch),
        }
    }

    pub fn digit_value(self, ch: u8) -> u8 {
        match self {
            Radix::Binary => binary_value(ch),
            Radix::Decimal => decimal_value(ch),
            Radix::Hexadecimal => hex_value(ch),
        }
    }
}

pub fn detect_sign<S: Source + ?Sized>(source: &S, cursor: usize) -> Sign {
    match source.byte_at(cursor) {
        b'-' => Sign::Negative,
        b'+' => Sign::Positive,
        _ => Sign::None,
    }
}

pub fn has_binary_prefix<S: Source + ?Sized>(source: &S, cursor: usize) -> bool {
    source.byte_at(cursor) == b'0' && matches!(source.byte_at(cursor + 1), b'b' | b'B')
}

pub fn has_hex_prefix<S: Source + ?Sized>(source: &S, cursor: usize) -> bool {
    source.byte_at(cursor) == b'0' && matches!(source.byte_at(cursor + 1), b'x' | b'X')
}

/// Resolves the prefix at `cursor`, binary first. Disabled prefixes are never reported.
pub fn detect_prefix<S: Source + ?Sized>(
    source: &S,
    cursor: usize,
    binary: bool,
    hex: bool,
) -> Option<Radix> {
    if binary && has_binary_prefix(source, cursor) {
        Some(Radix::Binary)
    } else if hex && has_hex_prefix(source, cursor) {
        Some(Radix::Hexadecimal)
    } else {
        None
    }
}
