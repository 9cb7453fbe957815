//! Left-to-right numeric literal scanner built from stateless stages.

pub mod classify;
pub mod cursor;
pub mod digits;
pub mod prefix;
pub mod scanner;
pub mod source;

pub use cursor::Cursor;
pub use prefix::{Radix, Sign, detect_prefix, detect_sign, has_binary_prefix, has_hex_prefix};
pub use scanner::{
    Scanned, Segment, SegmentKind, Segments, evaluate, evaluate_bounded, evaluate_bounded_with,
    evaluate_with, scan,
};
pub use source::{SENTINEL, Source};
