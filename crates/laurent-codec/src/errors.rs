// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for the Laurent codec.
//!
//! Every failure is a caller-correctable input problem, so each variant carries the
//! offending values instead of a free-form message.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while building [`crate::Parameters`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// Base below 2
    #[error("base should be greater than or equal to 2, got {base}")]
    InvalidBase { base: i64 },

    #[error("low power ({low_power}) should be less than the high power ({high_power})")]
    LowPowerNotBelowHighPower { low_power: i64, high_power: i64 },

    #[error("low power should be less than 0, got {low_power}")]
    LowPowerNotNegative { low_power: i64 },

    #[error("high power should be greater than 0, got {high_power}")]
    HighPowerNotPositive { high_power: i64 },

    #[error("degree should be greater than or equal to 1, got {degree}")]
    DegreeTooSmall { degree: i64 },

    #[error("degree should be a power of 2, got {degree}")]
    DegreeNotPowerOfTwo { degree: i64 },

    /// The code would not have room for every power in `[low_power, high_power]`.
    #[error(
        "degree ({degree}) should be greater than the high power ({high_power}) plus the absolute value of the low power ({low_power})"
    )]
    DegreeTooSmallForRange {
        degree: i64,
        high_power: i64,
        low_power: i64,
    },
}

/// Errors raised by the integer primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("radix should be positive, got {radix}")]
    InvalidRadix { radix: i64 },
}

/// Errors raised while encoding a fraction into a code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("denominator should not be zero")]
    DenominatorZero,

    /// The fraction is not a whole number of `base^-|low_power|` units.
    #[error("denominator should be {expected}, got {found}")]
    DenominatorMismatch { expected: BigInt, found: BigInt },

    #[error("numerator {numerator} should be inside the message space [{lower}, {upper}]")]
    NumeratorOutOfMessageSpace {
        numerator: BigInt,
        lower: BigInt,
        upper: BigInt,
    },

    #[error("cannot encode non-finite value {value}")]
    NonFiniteInput { value: f64 },

    #[error("cannot allocate a code of degree {degree}")]
    CodeAllocation { degree: usize },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Errors raised while decoding a code back into a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("code degree should be a power of 2, got length {length}")]
    CodeDegreeInvalid { length: usize },

    #[error("code degree ({found}) is different from the configured degree ({expected})")]
    CodeDegreeMismatch { expected: usize, found: usize },

    /// Decoded value has no 64-bit float image.
    #[error("decoded value {value} cannot be represented as a 64-bit float")]
    FloatConversion { value: String },
}
