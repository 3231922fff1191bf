//! Word-at-a-time conversion.
//!
//! Bytes are moved in and out of digit words through `bytemuck` byte views
//! instead of being folded one byte at a time. Decode goes straight from a
//! zero-extended `u32` word buffer to the integer's digits; encode reads the
//! integer's `u64` digits, keeps the words that overlap the requested width,
//! and slices the low bytes out of them.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;

use super::{Backend, BackendKind};
use crate::endian::{buf_u32_le_to_native, buf_u64_native_to_le, order_to_le, ByteOrder};

/// The word-oriented backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accelerated;

pub(crate) static ACCELERATED: Accelerated = Accelerated;

impl Backend for Accelerated {
    fn kind(&self) -> BackendKind {
        BackendKind::Accelerated
    }

    fn to_bigint(&self, bytes: &[u8], order: ByteOrder) -> BigUint {
        // Trailing bytes of the last word stay zero.
        let mut words = vec![0u32; bytes.len().div_ceil(4)];
        {
            let view: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
            let digits = &mut view[..bytes.len()];
            digits.copy_from_slice(bytes);
            order_to_le(digits, order);
        }
        buf_u32_le_to_native(&mut words);
        BigUint::new(words)
    }

    fn from_bigint(&self, value: &BigUint, buf: &mut [u8], order: ByteOrder) {
        let width = buf.len();
        let word_width = width.div_ceil(8);

        let mut words: Vec<u64> = value.iter_u64_digits().take(word_width).collect();
        words.resize(word_width, 0);
        buf_u64_native_to_le(&mut words);

        let view: &[u8] = bytemuck::cast_slice(&words);
        buf.copy_from_slice(&view[..width]);

        // `buf` holds the low `width` bytes little-endian.
        if order == ByteOrder::BigEndian {
            buf.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_unaligned_lengths() {
        for len in 0..=17usize {
            let bytes: Vec<u8> = (1..=len as u8).collect();
            let expected_be = BigUint::from_bytes_be(&bytes);
            let expected_le = BigUint::from_bytes_le(&bytes);
            assert_eq!(Accelerated.to_bigint(&bytes, ByteOrder::BigEndian), expected_be);
            assert_eq!(
                Accelerated.to_bigint(&bytes, ByteOrder::LittleEndian),
                expected_le
            );
        }
    }

    #[test]
    fn decode_all_zero() {
        assert_eq!(
            Accelerated.to_bigint(&[0; 13], ByteOrder::BigEndian),
            BigUint::from(0u8)
        );
    }

    #[test]
    fn encode_spans_word_boundary() {
        let value = BigUint::from(0x0102_0304_0506_0708_090Au128);
        let mut buf = [0u8; 10];
        Accelerated.from_bigint(&value, &mut buf, ByteOrder::BigEndian);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        Accelerated.from_bigint(&value, &mut buf, ByteOrder::LittleEndian);
        assert_eq!(buf, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn encode_drops_high_words() {
        let value = BigUint::from(0xAAAA_BBBB_CCCC_DDDD_EEEE_FFFF_0000_1111u128);
        let mut buf = [0u8; 3];
        Accelerated.from_bigint(&value, &mut buf, ByteOrder::BigEndian);
        assert_eq!(buf, [0x00, 0x11, 0x11]);
    }

    #[test]
    fn encode_zero_width() {
        let mut buf: [u8; 0] = [];
        Accelerated.from_bigint(&BigUint::from(7u8), &mut buf, ByteOrder::LittleEndian);
        assert!(buf.is_empty());
    }

    #[test]
    fn encode_zero_value() {
        let mut buf = [0xFFu8; 9];
        Accelerated.from_bigint(&BigUint::from(0u8), &mut buf, ByteOrder::BigEndian);
        assert_eq!(buf, [0; 9]);
    }
}
