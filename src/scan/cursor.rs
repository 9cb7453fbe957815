//! Forward-only cursor over a [`Source`] with an optional cap on consumed characters.

use super::source::{SENTINEL, Source};

/// Scan position plus the cap state used by bounded scans.
///
/// `position` only grows. `consumed` is the counter compared against `limit` before each
/// gated step; it is seeded by [`Cursor::start_charging`] once sign and prefix are behind us.
/// Charged scans count every consumed byte, so `consumed == position` for them.
pub struct Cursor<'src, S: ?Sized> {
    source: &'src S,
    position: usize,
    consumed: usize,
    limit: usize,
    charge_markers: bool,
}

impl<'src, S: Source + ?Sized> Cursor<'src, S> {
    pub fn new(source: &'src S) -> Self {
        Self::bounded(source, usize::MAX)
    }

    pub fn bounded(source: &'src S, limit: usize) -> Self {
        Self {
            source,
            position: 0,
            consumed: 0,
            limit,
            charge_markers: true,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.source.byte_at(self.position)
    }

    #[inline]
    pub fn has_budget(&self) -> bool {
        self.consumed < self.limit
    }

    /// Steps over bytes the caller already inspected (sign, prefix). Not charged.
    pub fn skip(&mut self, count: usize) {
        debug_assert!(
            (0..count).all(|offset| self.source.byte_at(self.position + offset) != SENTINEL),
            "skip must not cross the sentinel"
        );
        self.position += count;
    }

    /// Seeds the cap counter. Charged scans count everything skipped so far and every marker
    /// from here on; uncharged scans count digits only.
    pub fn start_charging(&mut self, charged: bool) {
        self.consumed = if charged { self.position } else { 0 };
        self.charge_markers = charged;
    }

    /// Consumes one byte matching `accepts`, charging it against the cap.
    #[inline]
    pub fn take_if(&mut self, accepts: impl Fn(u8) -> bool) -> Option<u8> {
        let ch = self.peek();
        if ch == SENTINEL || !self.has_budget() || !accepts(ch) {
            return None;
        }
        self.position += 1;
        self.consumed += 1;
        Some(ch)
    }

    /// Consumes a structural marker (`.`, `e`, exponent sign), charged only in charged scans.
    ///
    /// Markers are refused once the cap is spent in either mode.
    pub fn eat_if(&mut self, accepts: impl Fn(u8) -> bool) -> Option<u8> {
        let ch = self.peek();
        if ch == SENTINEL || !self.has_budget() || !accepts(ch) {
            return None;
        }
        self.position += 1;
        if self.charge_markers {
            self.consumed += 1;
        }
        Some(ch)
    }
}
