//! Base-256 digit conversion.
//!
//! The value is rendered as its minimal big-endian digits, laid out into the
//! target width from the least significant end, then reversed when
//! little-endian output is requested.

use num_bigint::BigUint;

use super::{Backend, BackendKind};
use crate::endian::{be_to_order, fit_be_into, ByteOrder};

/// The always-available backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

pub(crate) static PORTABLE: Portable = Portable;

impl Backend for Portable {
    fn kind(&self) -> BackendKind {
        BackendKind::Portable
    }

    fn to_bigint(&self, bytes: &[u8], order: ByteOrder) -> BigUint {
        match order {
            ByteOrder::BigEndian => BigUint::from_bytes_be(bytes),
            ByteOrder::LittleEndian => BigUint::from_bytes_le(bytes),
        }
    }

    fn from_bigint(&self, value: &BigUint, buf: &mut [u8], order: ByteOrder) {
        let digits = value.to_bytes_be();
        fit_be_into(&digits, buf);
        be_to_order(buf, order);
    }
}
