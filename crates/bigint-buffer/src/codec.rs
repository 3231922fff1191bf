//! The endian codec: fixed-width buffers to unsigned integers and back.
//!
//! A [`Codec`] is a handle to one selected [`Backend`]. Both backends produce
//! byte-identical results, so the choice only affects speed.
//!
//! Encoding keeps the *least significant* `width` bytes of a value that does
//! not fit, and zero-fills the most significant positions of one that is too
//! short:
//!
//! ```
//! use bigint_buffer::{ByteOrder, Codec};
//!
//! let codec = Codec::portable();
//! assert_eq!(
//!     codec.encode(&0xDEADBEEFu32, 2, ByteOrder::BigEndian).unwrap(),
//!     [0xBE, 0xEF]
//! );
//! assert_eq!(
//!     codec.encode(&0xDEADu32, 6, ByteOrder::LittleEndian).unwrap(),
//!     [0xAD, 0xDE, 0, 0, 0, 0]
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;

use crate::backend::portable::PORTABLE;
use crate::backend::{Backend, BackendKind};
use crate::config::CodecConfig;
use crate::endian::ByteOrder;
use crate::error::Result;
use crate::magnitude::ToMagnitude;

/// A selected conversion backend.
#[derive(Clone, Copy)]
pub struct Codec {
    backend: &'static dyn Backend,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("backend", &self.backend.kind())
            .finish()
    }
}

impl Codec {
    /// Select a backend according to `config`.
    ///
    /// Never fails: if the accelerated backend cannot be loaded the failure
    /// is logged and the portable backend is used instead.
    pub fn new(config: &CodecConfig) -> Self {
        if config.restricted_host {
            tracing::debug!(
                backend = "portable",
                "restricted host, skipping accelerated backend"
            );
            return Self::portable();
        }
        match config.backend {
            BackendKind::Portable => {
                tracing::debug!(
                    backend = "portable",
                    "backend selected by configuration"
                );
                Self::portable()
            }
            BackendKind::Accelerated => match Self::accelerated() {
                Ok(codec) => {
                    tracing::debug!(
                        backend = "accelerated",
                        "backend selected by configuration"
                    );
                    codec
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "failed to load accelerated backend, portable conversion will be used"
                    );
                    Self::portable()
                }
            },
        }
    }

    pub fn portable() -> Self {
        Self { backend: &PORTABLE }
    }

    /// The accelerated backend, if this build includes it.
    pub fn accelerated() -> Result<Self> {
        #[cfg(feature = "accelerated")]
        {
            Ok(Self {
                backend: &crate::backend::accelerated::ACCELERATED,
            })
        }
        #[cfg(not(feature = "accelerated"))]
        {
            Err(crate::error::Error::BackendUnavailable(
                "built without the `accelerated` feature",
            ))
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn name(&self) -> &'static str {
        self.backend.name()
    }

    /// Interpret `bytes` as an unsigned integer in `order`.
    ///
    /// Any byte sequence is valid; an empty one decodes to zero.
    pub fn decode(&self, bytes: &[u8], order: ByteOrder) -> BigUint {
        self.backend.to_bigint(bytes, order)
    }

    /// Encode `value` into exactly `width` bytes in `order`.
    pub fn encode<V: ToMagnitude + ?Sized>(
        &self,
        value: &V,
        width: usize,
        order: ByteOrder,
    ) -> Result<Vec<u8>> {
        let magnitude = value.to_magnitude()?;
        let mut buf = vec![0u8; width];
        self.backend.from_bigint(&magnitude, &mut buf, order);
        Ok(buf)
    }

    /// Encode `value` into `buf`, using `buf.len()` as the width.
    ///
    /// Every byte of `buf` is overwritten. On error `buf` is left untouched.
    pub fn encode_into<V: ToMagnitude + ?Sized>(
        &self,
        value: &V,
        buf: &mut [u8],
        order: ByteOrder,
    ) -> Result<()> {
        let magnitude = value.to_magnitude()?;
        self.backend.from_bigint(&magnitude, buf, order);
        Ok(())
    }

    pub fn le_to_bigint(&self, bytes: &[u8]) -> BigUint {
        self.decode(bytes, ByteOrder::LittleEndian)
    }

    pub fn be_to_bigint(&self, bytes: &[u8]) -> BigUint {
        self.decode(bytes, ByteOrder::BigEndian)
    }

    pub fn to_le_buffer<V: ToMagnitude + ?Sized>(
        &self,
        value: &V,
        width: usize,
    ) -> Result<Vec<u8>> {
        self.encode(value, width, ByteOrder::LittleEndian)
    }

    pub fn to_be_buffer<V: ToMagnitude + ?Sized>(
        &self,
        value: &V,
        width: usize,
    ) -> Result<Vec<u8>> {
        self.encode(value, width, ByteOrder::BigEndian)
    }
}

// --- Process-wide codec ---

#[cfg(feature = "std")]
static GLOBAL: std::sync::OnceLock<Codec> = std::sync::OnceLock::new();

/// Install the process-wide codec used by the free functions.
///
/// Only the first call (or first use of [`Codec::global`]) decides; returns
/// `false` if a codec was already installed.
#[cfg(feature = "std")]
pub fn init(config: &CodecConfig) -> bool {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        Codec::new(config)
    });
    installed
}

#[cfg(feature = "std")]
impl Codec {
    /// The process-wide codec, built from [`CodecConfig::default`] if
    /// [`init`] was never called.
    pub fn global() -> Codec {
        *GLOBAL.get_or_init(|| Codec::new(&CodecConfig::default()))
    }
}

#[cfg(feature = "std")]
pub fn decode(bytes: &[u8], order: ByteOrder) -> BigUint {
    Codec::global().decode(bytes, order)
}

#[cfg(feature = "std")]
pub fn encode<V: ToMagnitude + ?Sized>(
    value: &V,
    width: usize,
    order: ByteOrder,
) -> Result<Vec<u8>> {
    Codec::global().encode(value, width, order)
}

#[cfg(feature = "std")]
pub fn encode_into<V: ToMagnitude + ?Sized>(
    value: &V,
    buf: &mut [u8],
    order: ByteOrder,
) -> Result<()> {
    Codec::global().encode_into(value, buf, order)
}

/// Convert a little-endian buffer into an integer.
#[cfg(feature = "std")]
pub fn le_to_bigint(bytes: &[u8]) -> BigUint {
    Codec::global().le_to_bigint(bytes)
}

/// Convert a big-endian buffer into an integer.
#[cfg(feature = "std")]
pub fn be_to_bigint(bytes: &[u8]) -> BigUint {
    Codec::global().be_to_bigint(bytes)
}

/// Convert an integer into a little-endian buffer of `width` bytes.
#[cfg(feature = "std")]
pub fn to_le_buffer<V: ToMagnitude + ?Sized>(value: &V, width: usize) -> Result<Vec<u8>> {
    Codec::global().to_le_buffer(value, width)
}

/// Convert an integer into a big-endian buffer of `width` bytes.
#[cfg(feature = "std")]
pub fn to_be_buffer<V: ToMagnitude + ?Sized>(value: &V, width: usize) -> Result<Vec<u8>> {
    Codec::global().to_be_buffer(value, width)
}
