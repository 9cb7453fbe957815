//! Generic numeric-literal scanner.
//!
//! Recognizes `sign? (prefix digits | digits) ('.' digits)? exponent?` where the prefix is
//! `0b`/`0B` or `0x`/`0X`, and produces any primitive integer or float. Scanning never fails:
//! it stops at the first byte that does not fit the grammar and returns what it accumulated.
//!
//! ```
//! use numscan::{LiteralExt, evaluate, evaluate_bounded};
//!
//! assert_eq!(evaluate::<i32>("-0x123"), -291);
//! assert_eq!(evaluate_bounded::<u32>("12345", 4), 1234);
//! assert!(("3.14e2".evaluate::<f64>() - 314.0).abs() < 1e-9);
//! ```

pub mod ext;
pub mod numeric;
pub mod options;
pub mod scan;

pub use ext::LiteralExt;
pub use numeric::{Numeric, NumericKind};
pub use options::{Limit, ScanOptions};
pub use scan::{
    Radix, Scanned, Segment, SegmentKind, Sign, Source, evaluate, evaluate_bounded,
    evaluate_bounded_with, evaluate_with, scan,
};
