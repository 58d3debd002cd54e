// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Input validation for the encoder and the decoder.

use crate::errors::DecodeError;
use crate::parameters::Parameters;
use crate::utils::{is_power_of_two, pow};
use num_bigint::BigInt;
use num_traits::One;

/// Inclusive range of scaled numerators that survive an encode/decode round trip.
///
/// With `l = high_power - low_power + 1` balanced digits the largest magnitudes are reached
/// when every digit takes its extreme value, i.e. the extreme digit times the repunit
/// `(b^l - 1) / (b - 1)`.
///
/// | base | lower                         | upper                             |
/// |------|-------------------------------|-----------------------------------|
/// | even | `-(b/2) · (b^l-1)/(b-1)`      | `(b/2 - 1) · (b^l-1)/(b-1)`       |
/// | odd  | `-(b^l-1)/2`                  | `(b^l-1)/2`                       |
///
/// The odd row follows from the digit range `[-(b-1)/2, (b-1)/2]`; `b^l - 1` is even for odd
/// `b`, so both bounds are exact integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageSpace {
    lower: BigInt,
    upper: BigInt,
}

impl MessageSpace {
    /// Derives the bounds for `polynomial_length` digits in radix `base` (`base >= 2`).
    pub fn derive(base: i64, polynomial_length: usize) -> Self {
        let b = BigInt::from(base);
        let span = pow(base, polynomial_length) - BigInt::one();

        if base % 2 == 0 {
            let repunit = &span / (&b - BigInt::one());
            let half = &b / 2u32;
            Self {
                lower: -(&half * &repunit),
                upper: (half - BigInt::one()) * repunit,
            }
        } else {
            let half_span = span / 2u32;
            Self {
                lower: -half_span.clone(),
                upper: half_span,
            }
        }
    }

    pub fn lower(&self) -> &BigInt {
        &self.lower
    }

    pub fn upper(&self) -> &BigInt {
        &self.upper
    }

    /// Whether `numerator` lies in `[lower, upper]`.
    pub fn contains(&self, numerator: &BigInt) -> bool {
        numerator >= &self.lower && numerator <= &self.upper
    }
}

/// Checks that a code has the shape described by `params`.
///
/// # Errors
///
/// * [`DecodeError::CodeDegreeInvalid`] if the length is not a power of two.
/// * [`DecodeError::CodeDegreeMismatch`] if the length differs from `params.degree()`.
pub fn validate_code_degree(code: &[i64], params: &Parameters) -> Result<(), DecodeError> {
    let length = code.len();
    let is_power = i64::try_from(length).map_or(false, is_power_of_two);
    if !is_power {
        return Err(DecodeError::CodeDegreeInvalid { length });
    }
    if length != params.degree() {
        return Err(DecodeError::CodeDegreeMismatch {
            expected: params.degree(),
            found: length,
        });
    }
    Ok(())
}
