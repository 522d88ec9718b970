/*
    Decoding packed IEEE-754 single-precision bit patterns
*/

mod decode;
mod fields;

pub use decode::*;
pub use fields::*;

/// Bitwidth of the packed representation.
pub const TOTAL_SIZE: usize = 32;

/// Bitwidth of the exponent field.
pub const EXPONENT_SIZE: usize = 8;

/// Bitwidth of the mantissa field.
pub const MANTISSA_SIZE: usize = TOTAL_SIZE - EXPONENT_SIZE - 1;

/// Exponent of the largest finite value in this representation when
/// it is in the form `(-1)^s 2^e m` where `m` is a fraction between
/// 1 and 2.
pub const EMAX: i64 = i64::pow(2, (EXPONENT_SIZE - 1) as u32) - 1;

/// Exponent of the smallest normal value in this representation.
/// This is just `1 - EMAX`.
pub const EMIN: i64 = 1 - EMAX;

/// The exponent field bias.
/// This is just `EMAX`.
pub const BIAS: i64 = EMAX;

/// A decoded value grouped by classification.
///
/// Exponent fields of all ones decode to the two special
/// classifications rather than to a finite sentinel, so a caller can
/// always tell a legitimate zero from an out-of-range encoding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decoded {
    // signed zero or finite number
    // => (value)
    Finite(f64),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign)
    Nan(bool),
}
