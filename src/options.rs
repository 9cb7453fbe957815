//! Feature toggles and the length cap accepted by every scan.

/// Independent switches for each optional grammar stage. Everything is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    pub sign: bool,
    pub floating_point: bool,
    pub hex: bool,
    pub binary: bool,
    pub exponent: bool,
}

impl ScanOptions {
    pub const fn new() -> Self {
        Self {
            sign: true,
            floating_point: true,
            hex: true,
            binary: true,
            exponent: true,
        }
    }

    pub const fn without_sign(mut self) -> Self {
        self.sign = false;
        self
    }

    pub const fn without_floating_point(mut self) -> Self {
        self.floating_point = false;
        self
    }

    pub const fn without_hex(mut self) -> Self {
        self.hex = false;
        self
    }

    pub const fn without_binary(mut self) -> Self {
        self.binary = false;
        self
    }

    pub const fn without_exponent(mut self) -> Self {
        self.exponent = false;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Cap on how many source characters a bounded scan may consume.
///
/// When `charge_sign_and_prefix` is set the sign and base prefix count toward `max_length`;
/// otherwise only digits do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit {
    pub max_length: usize,
    pub charge_sign_and_prefix: bool,
}

impl Limit {
    pub const fn unbounded() -> Self {
        Self {
            max_length: usize::MAX,
            charge_sign_and_prefix: true,
        }
    }

    pub const fn chars(max_length: usize) -> Self {
        Self {
            max_length,
            charge_sign_and_prefix: true,
        }
    }

    pub const fn uncharged(mut self) -> Self {
        self.charge_sign_and_prefix = false;
        self
    }

    pub const fn is_bounded(&self) -> bool {
        self.max_length != usize::MAX
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::unbounded()
    }
}
