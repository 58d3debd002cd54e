// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Balanced base-`b` digit expansion of a scaled numerator.

use crate::errors::ArithmeticError;
use crate::parameters::Parameters;
use crate::utils::symmetric_modulo;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use tracing::trace;

/// Expands `numerator` into `params.polynomial_length()` balanced digits, lowest power first.
///
/// Digit `i` is the balanced residue of `⌊numerator / b^i⌋`. When a digit comes out negative
/// the working numerator borrows `b^(i+1)` so the following quotients stay consistent, which
/// yields `Σ digit_i · b^i == numerator` whenever the numerator is inside the message space.
///
/// # Arguments
///
/// * `numerator` - The numerator of a fraction whose denominator is `base^|low_power|`.
/// * `params` - Codec parameters.
///
/// # Returns
///
/// Digits in `[-base/2, base/2)`, ordered by ascending power.
pub fn expansion(numerator: &BigInt, params: &Parameters) -> Result<Vec<i64>, ArithmeticError> {
    let length = params.polynomial_length();
    let base = BigInt::from(params.base());

    let mut working = numerator.clone();
    let mut divisor = BigInt::one();
    let mut digits = Vec::with_capacity(length);

    for i in 0..length {
        let quotient = working.div_floor(&divisor);
        let digit = symmetric_modulo(&quotient, params.base())?;
        trace!(position = i, %quotient, digit, "Expansion step");

        let next_divisor = &divisor * &base;
        if digit < 0 {
            working += &next_divisor;
        }
        digits.push(digit);
        divisor = next_divisor;
    }

    Ok(digits)
}

/// Evaluates ascending digits at `base`, the integer inverse of [`expansion`].
pub fn recompose(digits: &[i64], base: i64) -> BigInt {
    let base = BigInt::from(base);
    digits
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, digit| acc * &base + *digit)
}
