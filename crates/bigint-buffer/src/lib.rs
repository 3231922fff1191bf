//! Conversion between fixed-width byte buffers and arbitrary-precision
//! unsigned integers, in little-endian and big-endian order.
//!
//! ```
//! use bigint_buffer::{be_to_bigint, to_le_buffer};
//! use num_bigint::BigUint;
//!
//! assert_eq!(be_to_bigint(&[0xDE, 0xAD, 0xBE, 0xEF]), BigUint::from(0xDEADBEEFu32));
//! assert_eq!(to_le_buffer(&0xDEADu32, 6).unwrap(), [0xAD, 0xDE, 0, 0, 0, 0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod backend;
pub mod codec;
pub mod config;
pub mod endian;
pub mod error;
pub mod magnitude;

pub use backend::{Backend, BackendKind};
pub use codec::Codec;
pub use config::CodecConfig;
pub use endian::ByteOrder;
pub use error::{Error, Result};
pub use magnitude::ToMagnitude;

#[cfg(feature = "std")]
pub use codec::{
    be_to_bigint, decode, encode, encode_into, init, le_to_bigint, to_be_buffer, to_le_buffer,
};
