//! Method-call sugar so any [`Source`] can be scanned in place.

use crate::numeric::Numeric;
use crate::options::{Limit, ScanOptions};
use crate::scan::{self, Scanned, Source};

/// Trait adding literal evaluation directly on top of a character source.
pub trait LiteralExt: Source {
    fn evaluate<T: Numeric>(&self) -> T;
    fn evaluate_with<T: Numeric>(&self, options: &ScanOptions) -> T;
    fn evaluate_bounded<T: Numeric>(&self, max_length: usize) -> T;
    fn evaluate_bounded_with<T: Numeric>(&self, limit: Limit, options: &ScanOptions) -> T;
    fn scan<T: Numeric>(&self, options: &ScanOptions, limit: Limit) -> Scanned<T>;
}

impl<S: Source + ?Sized> LiteralExt for S {
    fn evaluate<T: Numeric>(&self) -> T {
        scan::evaluate(self)
    }

    fn evaluate_with<T: Numeric>(&self, options: &ScanOptions) -> T {
        scan::evaluate_with(self, options)
    }

    fn evaluate_bounded<T: Numeric>(&self, max_length: usize) -> T {
        scan::evaluate_bounded(self, max_length)
    }

    fn evaluate_bounded_with<T: Numeric>(&self, limit: Limit, options: &ScanOptions) -> T {
        scan::evaluate_bounded_with(self, limit, options)
    }

    fn scan<T: Numeric>(&self, options: &ScanOptions, limit: Limit) -> Scanned<T> {
        scan::scan(self, options, limit)
    }
}
