// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arithmetic primitives shared by the encoder and the decoder.

use crate::errors::ArithmeticError;
use crate::parameters::Parameters;
use num::BigRational;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// Reduces a number modulo a modulus.
///
/// # Arguments
///
/// * `x` - The number to reduce
/// * `modulus` - The modulus to reduce by, must be positive
///
/// # Returns
///
/// The reduced number in the range [0, modulus)
pub fn reduce(x: &BigInt, modulus: &BigInt) -> BigInt {
    let mut r = x % modulus;
    if r < BigInt::zero() {
        r += modulus;
    }
    r
}

/// Balanced residue of `n` modulo `radix`.
///
/// Returns the unique `m` with `m ≡ n (mod radix)` and `-radix/2 <= m < radix/2`. For an
/// even radix the range is `[-radix/2, radix/2 - 1]`, for an odd radix it is
/// `[-(radix-1)/2, (radix-1)/2]`. The computation is exact on the big integer, so large
/// numerators never lose precision.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidRadix`] if `radix` is not positive.
pub fn symmetric_modulo(n: &BigInt, radix: i64) -> Result<i64, ArithmeticError> {
    if radix <= 0 {
        return Err(ArithmeticError::InvalidRadix { radix });
    }

    // The residue lies in [0, radix), so its single low u64 digit fits an i64.
    let residue = reduce(n, &BigInt::from(radix))
        .iter_u64_digits()
        .next()
        .unwrap_or(0) as i64;

    // 2 * residue < radix, written so it cannot overflow.
    if residue < radix - residue {
        Ok(residue)
    } else {
        Ok(residue - radix)
    }
}

/// Exact `base^exponent`.
pub fn pow(base: i64, exponent: usize) -> BigInt {
    num_traits::pow(BigInt::from(base), exponent)
}

/// Checks that `n` is a power of two.
///
/// The exponent is recovered through a base-2 logarithm and the power is then rebuilt with an
/// integer shift, so rounding in the logarithm can only cause a mismatch, never a false accept.
pub fn is_power_of_two(n: i64) -> bool {
    if n < 1 {
        return false;
    }
    let exponent = (n as f64).log2().round();
    exponent < 63.0 && (1i64 << exponent as u32) == n
}

/// Exact rational value of the shortest decimal representation of `value`.
///
/// This is the number a caller wrote down (`98123.45` is `9812345/100`), not the binary
/// approximation stored in the float. Returns `None` for NaN and infinities.
pub fn rational_from_f64(value: f64) -> Option<BigRational> {
    if !value.is_finite() {
        return None;
    }

    let repr = value.to_string();
    let (negative, digits) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr.as_str()),
    };
    let (whole, fractional) = digits.split_once('.').unwrap_or((digits, ""));

    let mut numerator: BigInt = format!("{whole}{fractional}").parse().ok()?;
    if negative {
        numerator = -numerator;
    }
    let denominator = pow(10, fractional.len());

    Some(BigRational::new(numerator, denominator))
}

/// Truncates `value` toward zero at `|low_power|` base-`b` places.
///
/// The result always has a denominator dividing `base^|low_power|`, so it is accepted by
/// [`crate::encode`] as long as it lies in the message space.
pub fn truncate_to_fraction(value: f64, params: &Parameters) -> Option<BigRational> {
    let exact = rational_from_f64(value)?;
    let scale = BigRational::from_integer(params.scale().clone());
    Some((exact * &scale).trunc() / scale)
}

/// Rounds `value` up (toward positive infinity) to `|low_power|` base-`b` places.
pub fn round_up(value: &BigRational, params: &Parameters) -> BigRational {
    let scale = BigRational::from_integer(params.scale().clone());
    (value * &scale).ceil() / scale
}

/// Float counterpart of [`round_up`].
///
/// Returns `None` for non-finite input.
pub fn round_up_f64(value: f64, params: &Parameters) -> Option<f64> {
    let exact = rational_from_f64(value)?;
    round_up(&exact, params).to_f64()
}
