//! Digit-consuming stages. Each runs until a non-digit, the sentinel, or the cap.

use crate::numeric::Numeric;

use super::classify::{decimal_value, is_decimal_digit};
use super::cursor::Cursor;
use super::prefix::Radix;
use super::source::Source;

/// Integer digits in `radix`. Floating targets consume binary digits without accumulating them.
pub fn accumulate_integer<T: Numeric, S: Source + ?Sized>(
    cursor: &mut Cursor<'_, S>,
    radix: Radix,
    mut value: T,
) -> T {
    while let Some(ch) = cursor.take_if(|ch| radix.accepts(ch)) {
        value = value.push_digit(radix, radix.digit_value(ch));
    }
    value
}

/// Fractional digits after the `.`, most significant first.
pub fn accumulate_fraction<T: Numeric, S: Source + ?Sized>(
    cursor: &mut Cursor<'_, S>,
    mut value: T,
) -> T {
    let mut place = T::first_place();
    while let Some(ch) = cursor.take_if(is_decimal_digit) {
        value = value.push_fraction_digit(decimal_value(ch), place);
        place = T::next_place(place);
    }
    value
}

/// `e`/`E`, an optional sign, then a decimal magnitude. No marker leaves `value` untouched.
pub fn accumulate_exponent<T: Numeric, S: Source + ?Sized>(
    cursor: &mut Cursor<'_, S>,
    value: T,
) -> T {
    if cursor.eat_if(|ch| matches!(ch, b'e' | b'E')).is_none() {
        return value;
    }
    let negative = cursor.eat_if(|ch| matches!(ch, b'-' | b'+')) == Some(b'-');

    let mut exponent: i32 = 0;
    while let Some(ch) = cursor.take_if(is_decimal_digit) {
        exponent = exponent
            .wrapping_mul(10)
            .wrapping_add(decimal_value(ch) as i32);
    }
    let exponent = if negative { exponent.wrapping_neg() } else { exponent };
    value.scale_by_exponent(exponent)
}
