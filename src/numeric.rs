//! Target types the scanner can produce and the per-kind accumulation arithmetic.
//!
//! ```text
//! Numeric
//!   ├── Integral  (i8..i128, isize, u8..u128, usize)  wrapping arithmetic
//!   └── Floating  (f32, f64)                          fraction + exponent stages
//! ```

use std::fmt;

use crate::scan::{Radix, Sign};

/// Static kind of a [`Numeric`] type, used to fold away the floating-point stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integral,
    Floating,
}

impl NumericKind {
    pub const fn is_floating(self) -> bool {
        matches!(self, NumericKind::Floating)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integral or floating-point primitive that a literal can be scanned into.
///
/// Sealed: the set of target types is fixed, and asking for anything else fails to compile.
pub trait Numeric:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const KIND: NumericKind;

    const ZERO: Self;

    /// `self * base + digit` in the target's own arithmetic.
    fn push_digit(self, radix: Radix, digit: u8) -> Self;

    /// Place value of the first fractional digit (`0.1`).
    fn first_place() -> Self;

    fn next_place(place: Self) -> Self;

    /// `self + digit * place`.
    fn push_fraction_digit(self, digit: u8, place: Self) -> Self;

    /// `self * 10^exponent`.
    fn scale_by_exponent(self, exponent: i32) -> Self;

    /// Final multiplication by the literal's sign.
    fn apply_sign(self, sign: Sign) -> Self;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::Integral;
                const ZERO: Self = 0;

                #[inline]
                fn push_digit(self, radix: Radix, digit: u8) -> Self {
                    match radix {
                        Radix::Decimal => self.wrapping_mul(10).wrapping_add(digit as $ty),
                        Radix::Hexadecimal => self.wrapping_mul(16).wrapping_add(digit as $ty),
                        Radix::Binary => self.wrapping_shl(1) | (digit as $ty),
                    }
                }

                #[inline]
                fn first_place() -> Self {
                    0
                }

                #[inline]
                fn next_place(_place: Self) -> Self {
                    0
                }

                #[inline]
                fn push_fraction_digit(self, _digit: u8, _place: Self) -> Self {
                    self
                }

                #[inline]
                fn scale_by_exponent(self, _exponent: i32) -> Self {
                    self
                }

                #[inline]
                fn apply_sign(self, sign: Sign) -> Self {
                    // two's complement: same bits as multiplying by -1
                    if sign.is_negative() { self.wrapping_neg() } else { self }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::Floating;
                const ZERO: Self = 0.0;

                #[inline]
                fn push_digit(self, radix: Radix, digit: u8) -> Self {
                    match radix {
                        Radix::Decimal => self * 10.0 + digit as $ty,
                        Radix::Hexadecimal => self * 16.0 + digit as $ty,
                        // binary literals are integer-only
                        Radix::Binary => self,
                    }
                }

                #[inline]
                fn first_place() -> Self {
                    0.1
                }

                #[inline]
                fn next_place(place: Self) -> Self {
                    place / 10.0
                }

                #[inline]
                fn push_fraction_digit(self, digit: u8, place: Self) -> Self {
                    self + digit as $ty * place
                }

                #[inline]
                fn scale_by_exponent(self, exponent: i32) -> Self {
                    self * (10.0 as $ty).powf(exponent as $ty)
                }

                #[inline]
                fn apply_sign(self, sign: Sign) -> Self {
                    if sign.is_negative() { self * -1.0 } else { self }
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
