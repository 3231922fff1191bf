//! Byte order handling for fixed-width integer buffers.
//!
//! Every conversion is defined in terms of big-endian (most-significant byte
//! first) digits. Little-endian results are produced by reversing the finished
//! big-endian buffer, so padding and truncation always act on the
//! most-significant end regardless of the requested order.

/// Order of bytes within a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl ByteOrder {
    /// Map a `big_endian` flag onto a byte order.
    #[inline]
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    #[inline]
    pub fn is_big_endian(self) -> bool {
        self == ByteOrder::BigEndian
    }
}

// --- Fixed-width layout ---

/// Copy the big-endian digits `src` into `dst`, right-aligned.
///
/// Positions of `dst` not covered by `src` are zeroed. When `src` is longer
/// than `dst`, only its last `dst.len()` bytes (the least significant ones)
/// are kept.
pub fn fit_be_into(src: &[u8], dst: &mut [u8]) {
    let kept = src.len().min(dst.len());
    let pad = dst.len() - kept;
    dst[..pad].fill(0);
    dst[pad..].copy_from_slice(&src[src.len() - kept..]);
}

/// Turn a finished big-endian buffer into `order`, in place.
#[inline]
pub fn be_to_order(buf: &mut [u8], order: ByteOrder) {
    if order == ByteOrder::LittleEndian {
        buf.reverse();
    }
}

/// Turn a buffer in `order` into little-endian, in place.
#[inline]
pub fn order_to_le(buf: &mut [u8], order: ByteOrder) {
    if order == ByteOrder::BigEndian {
        buf.reverse();
    }
}

// --- Bulk word conversions ---
//
// Word buffers are filled and drained through byte views, so their contents
// are little-endian on the wire. On little-endian platforms these are no-ops.

/// Convert little-endian `u32` words to native endianness in place.
pub fn buf_u32_le_to_native(words: &mut [u32]) {
    for w in words.iter_mut() {
        *w = u32::from_le(*w);
    }
}

/// Convert native-endian `u64` words to little-endian in place.
pub fn buf_u64_native_to_le(words: &mut [u64]) {
    for w in words.iter_mut() {
        *w = w.to_le();
    }
}
