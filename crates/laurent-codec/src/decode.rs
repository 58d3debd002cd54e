// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Code to fraction.

use crate::errors::DecodeError;
use crate::parameters::Parameters;
use crate::utils::{pow, round_up};
use crate::validate::validate_code_degree;
use num::BigRational;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

/// Decodes a code into the exact rational it represents.
///
/// # Errors
///
/// * [`DecodeError::CodeDegreeInvalid`] if the code length is not a power of two.
/// * [`DecodeError::CodeDegreeMismatch`] if the code length differs from `params.degree()`.
pub fn decode(code: &[i64], params: &Parameters) -> Result<BigRational, DecodeError> {
    validate_code_degree(code, params)?;

    let digits = ascending_digits(code, params);
    let weights = evaluation_powers(params);
    let value = dot_product(&weights, &digits);

    debug!(%value, degree = code.len(), "Decoded code");
    Ok(value)
}

/// Decodes a code into the nearest 64-bit float.
///
/// When the decoded rational has no exact float image it is first rounded up (toward positive
/// infinity) to `|low_power|` base-`b` places, then converted to the nearest float. Every code
/// decodes to a multiple of `base^-|low_power|`, digits in or out of the balanced range alike,
/// so the rounding step leaves the value unchanged and the result is the nearest float to the
/// exact rational.
///
/// # Errors
///
/// * Any error of [`decode`].
/// * [`DecodeError::FloatConversion`] if the value overflows `f64`.
pub fn decode_f64(code: &[i64], params: &Parameters) -> Result<f64, DecodeError> {
    let value = decode(code, params)?;

    let exact = value
        .to_f64()
        .filter(|float| BigRational::from_float(*float).as_ref() == Some(&value));
    let float = match exact {
        Some(float) => Some(float),
        None => round_up(&value, params).to_f64(),
    };

    float
        .filter(|float| float.is_finite())
        .ok_or_else(|| DecodeError::FloatConversion {
            value: value.to_string(),
        })
}

/// Restores the ascending digit order of a code.
///
/// Inverse of [`crate::generate_code`]: the trailing `|low_power|` entries are negated back
/// into the digits for powers `low_power..0`, followed by the leading `high_power + 1` entries.
/// Padding is dropped.
///
/// # Panics
///
/// Panics if `code` is shorter than `params.polynomial_length()`.
pub fn ascending_digits(code: &[i64], params: &Parameters) -> Vec<i64> {
    let wrapped = params.precision();
    let leading = params.polynomial_length() - wrapped;

    code[code.len() - wrapped..]
        .iter()
        .map(|digit| -digit)
        .chain(code[..leading].iter().copied())
        .collect()
}

/// Exact weights `base^(low_power + i)` for `i` in `[0, polynomial_length)`.
///
/// Negative powers are exact reciprocals.
pub fn evaluation_powers(params: &Parameters) -> Vec<BigRational> {
    (0..params.polynomial_length())
        .map(|i| {
            let exponent = params.low_power() + i as i64;
            let magnitude = pow(params.base(), exponent.unsigned_abs() as usize);
            if exponent < 0 {
                BigRational::new(BigInt::one(), magnitude)
            } else {
                BigRational::from_integer(magnitude)
            }
        })
        .collect()
}

/// `Σ weights[i] · digits[i]`, computed exactly.
pub fn dot_product(weights: &[BigRational], digits: &[i64]) -> BigRational {
    weights
        .iter()
        .zip(digits)
        .fold(BigRational::zero(), |acc, (weight, digit)| {
            acc + weight * BigRational::from_integer(BigInt::from(*digit))
        })
}
