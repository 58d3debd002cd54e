// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Fraction to code.

use crate::errors::EncodeError;
use crate::expansion::expansion;
use crate::parameters::Parameters;
use crate::utils::truncate_to_fraction;
use num::BigRational;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

/// Encodes an exact rational into a code of `params.degree()` digits.
///
/// The fraction is scaled by `base^|low_power|`; the result must be an integer, so any
/// fraction whose reduced denominator divides `base^|low_power|` is accepted.
///
/// # Errors
///
/// * [`EncodeError::DenominatorMismatch`] if the scaled fraction is not an integer.
/// * [`EncodeError::NumeratorOutOfMessageSpace`] if the scaled numerator cannot be
///   represented with the configured powers.
pub fn encode(fraction: &BigRational, params: &Parameters) -> Result<Vec<i64>, EncodeError> {
    let numerator = isolate_numerator(fraction, params)?;
    encode_numerator(&numerator, params)
}

/// Encodes `numerator / denominator` given as unreduced parts.
///
/// # Errors
///
/// * [`EncodeError::DenominatorZero`] if `denominator` is zero.
/// * [`EncodeError::DenominatorMismatch`] if `denominator` is not exactly `base^|low_power|`.
/// * [`EncodeError::NumeratorOutOfMessageSpace`] if `numerator` is outside the message space.
pub fn encode_fraction(
    numerator: &BigInt,
    denominator: &BigInt,
    params: &Parameters,
) -> Result<Vec<i64>, EncodeError> {
    if denominator.is_zero() {
        return Err(EncodeError::DenominatorZero);
    }
    if denominator != params.scale() {
        return Err(EncodeError::DenominatorMismatch {
            expected: params.scale().clone(),
            found: denominator.clone(),
        });
    }
    encode_numerator(numerator, params)
}

/// Encodes a float, truncated toward zero at `|low_power|` base-`b` places.
///
/// The value taken is the shortest decimal that identifies the float, so `98123.45` is
/// encoded as `9812345/100` rather than as its binary approximation.
///
/// # Errors
///
/// * [`EncodeError::NonFiniteInput`] for NaN and infinities.
/// * Any error of [`encode`].
pub fn encode_f64(value: f64, params: &Parameters) -> Result<Vec<i64>, EncodeError> {
    let fraction =
        truncate_to_fraction(value, params).ok_or(EncodeError::NonFiniteInput { value })?;
    encode(&fraction, params)
}

/// Lays out ascending digits as a code.
///
/// The digits for powers `0..=high_power` come first, followed by zero padding, followed by
/// the negated digits for powers `low_power..0`. In the ring `Z[x]/(x^d + 1)` this places
/// `x^-k` at `-x^(d-k)`.
///
/// # Errors
///
/// Returns [`EncodeError::CodeAllocation`] if a buffer of `params.degree()` words cannot be
/// reserved.
///
/// # Panics
///
/// Panics if `digits` is shorter than `|low_power|` or longer than `params.degree()`.
pub fn generate_code(digits: &[i64], params: &Parameters) -> Result<Vec<i64>, EncodeError> {
    let wrapped = params.precision();
    let degree = params.degree();

    let mut code = Vec::new();
    code.try_reserve_exact(degree)
        .map_err(|_| EncodeError::CodeAllocation { degree })?;
    code.extend_from_slice(&digits[wrapped..]);
    code.resize(degree - wrapped, 0);
    code.extend(digits[..wrapped].iter().map(|digit| -digit));
    Ok(code)
}

fn isolate_numerator(fraction: &BigRational, params: &Parameters) -> Result<BigInt, EncodeError> {
    let scaled = fraction * BigRational::from_integer(params.scale().clone());
    if !scaled.is_integer() {
        return Err(EncodeError::DenominatorMismatch {
            expected: params.scale().clone(),
            found: fraction.denom().clone(),
        });
    }
    Ok(scaled.to_integer())
}

fn encode_numerator(numerator: &BigInt, params: &Parameters) -> Result<Vec<i64>, EncodeError> {
    let space = params.message_space();
    if !space.contains(numerator) {
        return Err(EncodeError::NumeratorOutOfMessageSpace {
            numerator: numerator.clone(),
            lower: space.lower().clone(),
            upper: space.upper().clone(),
        });
    }

    let digits = expansion(numerator, params)?;
    let code = generate_code(&digits, params)?;
    debug!(%numerator, degree = code.len(), "Encoded numerator");
    Ok(code)
}
