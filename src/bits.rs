/*
    Bit-string magnitudes
*/

use std::fmt;
use std::ops::{Range, ShlAssign};
use std::str::FromStr;

use bitvec::prelude::Lsb0;
use num_bigint::BigUint;
use num_traits::cast::ToPrimitive;

use crate::error::DecodeError;

pub(crate) type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

/// Selects how a bit-string maps to a numeric magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// Big-endian unsigned integer.
    Integer,
    /// Digits after a binary point.
    Fractional,
}

/// An ordered sequence of binary digits parsed from text.
///
/// Digits are stored in writing order, most significant first. Any
/// length is valid, including empty; fixed widths are the concern of
/// the splitting layer, not of the bit-string itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitString {
    bits: BitVec,
}

impl BitString {
    /// Returns the number of digits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if this bit-string holds no digits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the digit at `index`, counted from the most
    /// significant end.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Returns true if every digit is 0.
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    // Copies a sub-range out into its own bit-string.
    pub(crate) fn field(&self, range: Range<usize>) -> Self {
        Self {
            bits: self.bits[range].into(),
        }
    }

    /// Returns the magnitude this bit-string encodes under `mode`.
    ///
    /// `Integer` folds most-significant-first, doubling the
    /// accumulator per digit; an 8-digit field lands in `[0, 255]`.
    /// `Fractional` weights the first digit 0.5 and halves the weight
    /// per digit after it; a 23-digit field lands in `[0, 1)`. An
    /// empty bit-string is 0 in either mode.
    pub fn magnitude(&self, mode: ParseMode) -> f64 {
        match mode {
            ParseMode::Integer => self.to_biguint().to_f64().unwrap_or(f64::INFINITY),
            ParseMode::Fractional => {
                let mut acc = 0.0;
                let mut factor = 0.5;
                for b in self.bits.iter() {
                    if *b {
                        acc += factor;
                    }
                    factor /= 2.0;
                }
                acc
            }
        }
    }

    // Converts a `BitString` to a `BigUint`
    pub(crate) fn to_biguint(&self) -> BigUint {
        let mut i = BigUint::default();
        for b in self.bits.iter() {
            i.shl_assign(1);
            i.set_bit(0, *b);
        }
        i
    }
}

impl FromStr for BitString {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(DecodeError::InvalidBit { position, found }),
            }
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits.iter() {
            f.write_str(if *b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
