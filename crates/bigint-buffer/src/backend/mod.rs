//! Conversion backends.
//!
//! Each backend implements the same two primitives over an already validated
//! unsigned magnitude. A [`crate::codec::Codec`] picks one at construction and
//! delegates every call to it; callers cannot observe which one is in use
//! except through [`Backend::kind`].

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;

use crate::endian::ByteOrder;

#[cfg(feature = "accelerated")]
pub mod accelerated;
pub mod portable;

/// Identifies a backend implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Byte-at-a-time digit conversion. Always available.
    Portable,
    /// Word-at-a-time conversion. Requires the `accelerated` feature.
    Accelerated,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Portable => "portable",
            BackendKind::Accelerated => "accelerated",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend;

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown backend, expected `portable` or `accelerated`")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownBackend {}

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("portable") {
            Ok(BackendKind::Portable)
        } else if s.eq_ignore_ascii_case("accelerated") {
            Ok(BackendKind::Accelerated)
        } else {
            Err(UnknownBackend)
        }
    }
}

/// A buffer/integer conversion strategy.
pub trait Backend: Send + Sync {
    fn kind(&self) -> BackendKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Interpret `bytes` as an unsigned integer in `order`.
    fn to_bigint(&self, bytes: &[u8], order: ByteOrder) -> BigUint;

    /// Write `value` into all of `buf` in `order`, zero-padding or dropping
    /// the most significant bytes to fit `buf.len()`.
    fn from_bigint(&self, value: &BigUint, buf: &mut [u8], order: ByteOrder);
}
