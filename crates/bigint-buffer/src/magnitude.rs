//! Unsigned magnitudes accepted by the encoders.
//!
//! Encoding is only defined for non-negative integers. Signed inputs are
//! checked here so that the backends only ever see a `BigUint`.

use alloc::borrow::Cow;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{Error, Result};

const NEGATIVE: &str = "cannot encode a negative integer";

/// Integers that can be encoded into a fixed-width buffer.
pub trait ToMagnitude {
    /// The unsigned magnitude of `self`, or [`Error::InvalidArgument`] when
    /// `self` is negative.
    fn to_magnitude(&self) -> Result<Cow<'_, BigUint>>;
}

impl ToMagnitude for BigUint {
    fn to_magnitude(&self) -> Result<Cow<'_, BigUint>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToMagnitude for BigInt {
    fn to_magnitude(&self) -> Result<Cow<'_, BigUint>> {
        match self.sign() {
            Sign::Minus => Err(Error::InvalidArgument(NEGATIVE)),
            Sign::NoSign | Sign::Plus => Ok(Cow::Borrowed(self.magnitude())),
        }
    }
}

macro_rules! impl_unsigned_magnitude {
    ($($t:ty),*) => {
        $(
            impl ToMagnitude for $t {
                fn to_magnitude(&self) -> Result<Cow<'_, BigUint>> {
                    Ok(Cow::Owned(BigUint::from(*self)))
                }
            }
        )*
    };
}

macro_rules! impl_signed_magnitude {
    ($($t:ty),*) => {
        $(
            impl ToMagnitude for $t {
                fn to_magnitude(&self) -> Result<Cow<'_, BigUint>> {
                    if *self < 0 {
                        return Err(Error::InvalidArgument(NEGATIVE));
                    }
                    Ok(Cow::Owned(BigUint::from(self.unsigned_abs())))
                }
            }
        )*
    };
}

impl_unsigned_magnitude!(u8, u16, u32, u64, u128, usize);
impl_signed_magnitude!(i8, i16, i32, i64, i128, isize);
