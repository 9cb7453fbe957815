//! Stage orchestration: sign, prefix, integer digits, fraction, exponent, then the sign once.

use std::ops::Range;

use smallvec::SmallVec;
use tracing::trace;

use crate::numeric::Numeric;
use crate::options::{Limit, ScanOptions};

use super::cursor::Cursor;
use super::digits::{accumulate_exponent, accumulate_fraction, accumulate_integer};
use super::prefix::{Radix, Sign, detect_prefix, detect_sign};
use super::source::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Sign,
    Prefix,
    Integer,
    /// `.` and the digits after it.
    Fraction,
    /// `e`/`E`, its sign, and its digits.
    Exponent,
}

/// Source span covered by one recognized piece of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// At most one segment per stage, so the list never spills to the heap.
pub type Segments = SmallVec<[Segment; 5]>;

/// Value produced by a scan together with how far it got.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned<T> {
    pub value: T,
    /// Cursor position when the scan stopped.
    pub consumed: usize,
    pub radix: Radix,
    pub sign: Sign,
    pub segments: Segments,
}

impl<T> Scanned<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn segment(&self, kind: SegmentKind) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.kind == kind)
    }

    /// True when the scan stopped at the end of `source` rather than on a stray character.
    pub fn is_complete<S: Source + ?Sized>(&self, source: &S) -> bool {
        self.consumed == source.logical_len()
    }
}

fn record(segments: &mut Segments, kind: SegmentKind, start: usize, end: usize) {
    if start < end {
        segments.push(Segment { kind, start, end });
    }
}

/// Scans one literal from the start of `source`. Never fails.
pub fn scan<T: Numeric>(
    source: &(impl Source + ?Sized),
    options: &ScanOptions,
    limit: Limit,
) -> Scanned<T> {
    let mut cursor = Cursor::bounded(source, limit.max_length);
    let mut segments = Segments::new();

    let mut sign = Sign::None;
    if options.sign {
        sign = detect_sign(source, cursor.position());
        if sign != Sign::None {
            let start = cursor.position();
            cursor.skip(1);
            record(&mut segments, SegmentKind::Sign, start, cursor.position());
        }
    }

    let radix = match detect_prefix(source, cursor.position(), options.binary, options.hex) {
        Some(radix) => {
            let start = cursor.position();
            cursor.skip(2);
            record(&mut segments, SegmentKind::Prefix, start, cursor.position());
            radix
        }
        None => Radix::Decimal,
    };

    cursor.start_charging(limit.charge_sign_and_prefix);

    let start = cursor.position();
    let mut value = accumulate_integer(&mut cursor, radix, T::ZERO);
    record(&mut segments, SegmentKind::Integer, start, cursor.position());

    if T::KIND.is_floating() && options.floating_point {
        let start = cursor.position();
        if cursor.eat_if(|ch| ch == b'.').is_some() {
            value = accumulate_fraction(&mut cursor, value);
            record(&mut segments, SegmentKind::Fraction, start, cursor.position());
        }

        if options.exponent {
            let start = cursor.position();
            value = accumulate_exponent(&mut cursor, value);
            record(&mut segments, SegmentKind::Exponent, start, cursor.position());
        }
    }

    let value = if options.sign { value.apply_sign(sign) } else { value };

    trace!(
        consumed = cursor.position(),
        base = radix.base(),
        kind = ?T::KIND,
        "scanned numeric literal"
    );

    Scanned {
        value,
        consumed: cursor.position(),
        radix,
        sign,
        segments,
    }
}

/// Scans `source` with every grammar stage enabled and no length cap.
pub fn evaluate<T: Numeric>(source: &(impl Source + ?Sized)) -> T {
    scan::<T>(source, &ScanOptions::default(), Limit::unbounded()).into_value()
}

pub fn evaluate_with<T: Numeric>(source: &(impl Source + ?Sized), options: &ScanOptions) -> T {
    scan::<T>(source, options, Limit::unbounded()).into_value()
}

/// Scans at most `max_length` characters, counting sign and prefix.
pub fn evaluate_bounded<T: Numeric>(source: &(impl Source + ?Sized), max_length: usize) -> T {
    scan::<T>(source, &ScanOptions::default(), Limit::chars(max_length)).into_value()
}

pub fn evaluate_bounded_with<T: Numeric>(
    source: &(impl Source + ?Sized),
    limit: Limit,
    options: &ScanOptions,
) -> T {
    scan::<T>(source, options, limit).into_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_each_recognized_piece() {
        let scanned = scan::<f64>("-12.5e3", &ScanOptions::default(), Limit::unbounded());
        let kinds: Vec<_> = scanned.segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Sign,
                SegmentKind::Integer,
                SegmentKind::Fraction,
                SegmentKind::Exponent
            ]
        );
        assert_eq!(scanned.segment(SegmentKind::Fraction).map(Segment::span), Some(3..5));
        assert_eq!(scanned.consumed, 7);
        assert!(scanned.is_complete("-12.5e3"));
        assert!((scanned.value + 12500.0).abs() < 1e-9);
    }

    #[test]
    fn prefix_segment_and_radix_are_reported() {
        let scanned = scan::<u32>("0x1fz", &ScanOptions::default(), Limit::unbounded());
        assert_eq!(scanned.radix, Radix::Hexadecimal);
        assert_eq!(scanned.segment(SegmentKind::Prefix).map(Segment::span), Some(0..2));
        assert_eq!(scanned.value, 0x1F);
        assert!(!scanned.is_complete("0x1fz"), "the stray 'z' stops the scan");
    }

    #[test]
    fn unrecognized_leading_character_yields_zero() {
        let scanned = scan::<i32>("-abc", &ScanOptions::default(), Limit::unbounded());
        assert_eq!(scanned.value, 0);
        assert_eq!(scanned.sign, Sign::Negative);
        assert_eq!(scanned.consumed, 1);
        assert!(scanned.segment(SegmentKind::Integer).is_none());
    }

    #[test]
    fn integral_targets_stop_at_the_decimal_point() {
        let scanned = scan::<i64>("12.75", &ScanOptions::default(), Limit::unbounded());
        assert_eq!(scanned.value, 12);
        assert_eq!(scanned.consumed, 2);
    }

    #[test]
    fn cap_leaves_the_marker_unconsumed() {
        let scanned = scan::<f32>("12.5", &ScanOptions::default(), Limit::chars(2));
        assert_eq!(scanned.value, 12.0);
        assert_eq!(scanned.consumed, 2, "a spent cap refuses the '.' marker");
    }

    #[test]
    fn charged_cap_counts_float_markers() {
        let scanned = scan::<f64>("1e5", &ScanOptions::default(), Limit::chars(2));
        assert_eq!(scanned.value, 1.0, "the 'e' spends the last slot");
        assert_eq!(scanned.consumed, 2);

        let scanned = scan::<f64>("-12.5", &ScanOptions::default(), Limit::chars(4));
        assert_eq!(scanned.value, -12.0);
        assert_eq!(scanned.consumed, 4);
    }
}
