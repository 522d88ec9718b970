/*
    Splitting a packed bit pattern into its fields
*/

use tracing::debug;

use crate::bits::BitString;
use crate::error::DecodeError;

use super::{EXPONENT_SIZE, TOTAL_SIZE};

/// The sign, exponent, and mantissa fields of a packed
/// single-precision bit pattern.
///
/// Created once per decode by [`SplitFields::split`]; each decode
/// call owns its fields outright and discards them when it is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitFields {
    sign: BitString,
    exponent: BitString,
    fraction: BitString,
}

impl SplitFields {
    /// Splices a packed bit pattern into the sign, exponent, and
    /// mantissa fields.
    ///
    /// Fails with [`DecodeError::InvalidLength`] unless `bits` holds
    /// exactly [`TOTAL_SIZE`] digits, so a field can never be left
    /// under-filled.
    pub fn split(bits: &BitString) -> Result<Self, DecodeError> {
        if bits.len() != TOTAL_SIZE {
            return Err(DecodeError::InvalidLength {
                expected: TOTAL_SIZE,
                found: bits.len(),
            });
        }

        let fields = Self {
            sign: bits.field(0..1),
            exponent: bits.field(1..1 + EXPONENT_SIZE),
            fraction: bits.field(1 + EXPONENT_SIZE..TOTAL_SIZE),
        };
        debug!(
            sign = %fields.sign,
            exponent = %fields.exponent,
            fraction = %fields.fraction,
            "split packed fields"
        );
        Ok(fields)
    }

    /// Returns the sign field.
    pub fn sign(&self) -> &BitString {
        &self.sign
    }

    /// Returns the exponent field.
    pub fn exponent(&self) -> &BitString {
        &self.exponent
    }

    /// Returns the mantissa field.
    pub fn fraction(&self) -> &BitString {
        &self.fraction
    }

    /// Returns true if the sign bit is set.
    pub fn sign_bit(&self) -> bool {
        self.sign.bit(0)
    }
}
