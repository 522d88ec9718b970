/*
    Reconstructing a decimal value from split fields
*/

use num_traits::cast::ToPrimitive;
use tracing::debug;

use crate::bits::{BitString, ParseMode};
use crate::error::DecodeError;

use super::{Decoded, SplitFields, BIAS, EMAX, EMIN};

/// Decodes a 32-character binary string into the decimal value of the
/// single-precision number it encodes.
///
/// This is the whole pipeline: text to [`BitString`], field
/// splitting, and IEEE-754 reconstruction. The stages are pure, so
/// the same input always yields the same result.
pub fn decode_str(input: &str) -> Result<Decoded, DecodeError> {
    let bits = input.parse::<BitString>()?;
    let fields = SplitFields::split(&bits)?;
    Ok(decode(&fields))
}

/// Reconstructs the value encoded by `fields`.
///
/// The exponent field selects the regime: all ones is an infinity or
/// NaN, all zeros a signed zero or subnormal with no implicit leading
/// 1, and anything in between a normal number scaled by the unbiased
/// exponent.
pub fn decode(fields: &SplitFields) -> Decoded {
    let sign = fields.sign_bit();
    let exp = fields.exponent().to_biguint().to_i64().unwrap() - BIAS;
    let fraction = fields.fraction().magnitude(ParseMode::Fractional);
    debug!(sign, exponent = exp + BIAS, fraction, "parsed decimal fields");

    // branch on exponent
    if exp > EMAX {
        if fields.fraction().is_zero() {
            // infinity
            Decoded::Infinity(sign)
        } else {
            // NaN
            Decoded::Nan(sign)
        }
    } else {
        let sign_part = if sign { -1.0 } else { 1.0 };
        let value = if exp < EMIN {
            // subnormal or zero
            sign_part * 2f64.powi(EMIN as i32) * fraction
        } else {
            // normal
            sign_part * 2f64.powi(exp as i32) * (1.0 + fraction)
        };
        Decoded::Finite(value)
    }
}

// Classification and rendering
impl Decoded {
    /// Returns the sign of this value.
    pub fn sign(&self) -> bool {
        match self {
            Decoded::Finite(v) => v.is_sign_negative(),
            Decoded::Infinity(s) => *s,
            Decoded::Nan(s) => *s,
        }
    }

    /// Returns true if this value is neither an infinity nor a NaN.
    pub fn is_finite(&self) -> bool {
        matches!(self, Decoded::Finite(_))
    }

    /// Returns true if this value encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Decoded::Infinity(_))
    }

    /// Returns true if this value does not encode a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Decoded::Nan(_))
    }

    /// Renders this value as a double, mapping the special
    /// classifications to `±inf` and a NaN carrying the decoded sign.
    pub fn to_f64(&self) -> f64 {
        match self {
            Decoded::Finite(v) => *v,
            Decoded::Infinity(false) => f64::INFINITY,
            Decoded::Infinity(true) => f64::NEG_INFINITY,
            Decoded::Nan(s) => f64::NAN.copysign(if *s { -1.0 } else { 1.0 }),
        }
    }
}

// Implementing `From<Decoded>` for `f64`
impl From<Decoded> for f64 {
    fn from(d: Decoded) -> Self {
        d.to_f64()
    }
}
