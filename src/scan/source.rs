//! Read-only access to sentinel-terminated character sources.

use std::ffi::{CStr, CString};

/// Byte reported at and past the logical end of a source.
pub const SENTINEL: u8 = 0;

/// Stand-in byte for characters outside ASCII; matches no class in the grammar.
const NON_ASCII: u8 = 0xFF;

/// Indexable character sequence terminated by [`SENTINEL`] or by the end of its storage.
///
/// Implementations never copy the underlying text. Reading at or beyond the logical end must
/// return [`SENTINEL`] so look-ahead (prefix detection reads two bytes) stays in bounds.
pub trait Source {
    fn byte_at(&self, index: usize) -> u8;

    /// Position of the first sentinel.
    fn logical_len(&self) -> usize {
        let mut index = 0;
        while self.byte_at(index) != SENTINEL {
            index += 1;
        }
        index
    }
}

impl Source for [u8] {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.get(index).copied().unwrap_or(SENTINEL)
    }

    fn logical_len(&self) -> usize {
        self.iter()
            .position(|&byte| byte == SENTINEL)
            .unwrap_or(self.len())
    }
}

impl Source for str {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_bytes().byte_at(index)
    }

    fn logical_len(&self) -> usize {
        self.as_bytes().logical_len()
    }
}

impl Source for [char] {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        match self.get(index) {
            Some(&ch) if ch.is_ascii() => ch as u8,
            Some(_) => NON_ASCII,
            None => SENTINEL,
        }
    }
}

impl Source for CStr {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.to_bytes().byte_at(index)
    }

    fn logical_len(&self) -> usize {
        self.to_bytes().len()
    }
}

impl Source for String {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_str().byte_at(index)
    }

    fn logical_len(&self) -> usize {
        self.as_str().logical_len()
    }
}

impl Source for Vec<u8> {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice().byte_at(index)
    }

    fn logical_len(&self) -> usize {
        self.as_slice().logical_len()
    }
}

impl Source for CString {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_c_str().byte_at(index)
    }

    fn logical_len(&self) -> usize {
        self.as_c_str().logical_len()
    }
}

impl<S: Source + ?Sized> Source for &S {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        (**self).byte_at(index)
    }

    fn logical_len(&self) -> usize {
        (**self).logical_len()
    }
}
