// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Validated codec configuration.

use crate::errors::ParameterError;
use crate::utils::{is_power_of_two, pow};
use crate::validate::MessageSpace;
use num_bigint::BigInt;
use std::sync::OnceLock;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable configuration shared by the encoder and the decoder.
///
/// A code represents `Σ digit_i · base^i` for `i` in `[low_power, high_power]`, laid out in a
/// vector of `degree` signed integers. Values are checked once in [`Parameters::new`] and never
/// change afterwards, so a `Parameters` can be shared freely between callers.
///
/// The scale `base^|low_power|` and the message space are big integers with roughly
/// `|low_power| · log2(base)` and `polynomial_length · log2(base)` bits. They are computed on
/// first use, so construction never allocates them, but encoding with `|low_power|` or
/// `high_power` in the billions will exhaust memory. Codes hold `degree` words, and
/// [`crate::encode`] reports [`crate::EncodeError::CodeAllocation`] when that buffer cannot be
/// reserved.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ParametersConfig", into = "ParametersConfig")
)]
pub struct Parameters {
    base: i64,
    low_power: i64,
    high_power: i64,
    degree: i64,
    /// `base^|low_power|`, the denominator of every encodable fraction.
    scale: OnceLock<BigInt>,
    message_space: OnceLock<MessageSpace>,
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.low_power == other.low_power
            && self.high_power == other.high_power
            && self.degree == other.degree
    }
}

impl Eq for Parameters {}

/// Plain, unvalidated form of [`Parameters`] used for configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParametersConfig {
    pub base: i64,
    pub low_power: i64,
    pub high_power: i64,
    pub degree: i64,
}

impl Parameters {
    /// Builds a validated set of parameters.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. `base >= 2`
    /// 2. `low_power < high_power`
    /// 3. `low_power < 0`
    /// 4. `high_power > 0`
    /// 5. `degree >= 1`
    /// 6. `degree` is a power of two
    /// 7. `degree > high_power + |low_power|`
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] matching the first violated rule.
    pub fn new(
        base: i64,
        low_power: i64,
        high_power: i64,
        degree: i64,
    ) -> Result<Self, ParameterError> {
        if base < 2 {
            return Err(ParameterError::InvalidBase { base });
        }
        if low_power >= high_power {
            return Err(ParameterError::LowPowerNotBelowHighPower {
                low_power,
                high_power,
            });
        }
        if low_power >= 0 {
            return Err(ParameterError::LowPowerNotNegative { low_power });
        }
        if high_power <= 0 {
            return Err(ParameterError::HighPowerNotPositive { high_power });
        }
        if degree < 1 {
            return Err(ParameterError::DegreeTooSmall { degree });
        }
        if !is_power_of_two(degree) {
            return Err(ParameterError::DegreeNotPowerOfTwo { degree });
        }
        // i128 keeps high_power + |low_power| exact for any i64 inputs.
        if i128::from(degree) <= i128::from(high_power) + i128::from(low_power.unsigned_abs()) {
            return Err(ParameterError::DegreeTooSmallForRange {
                degree,
                high_power,
                low_power,
            });
        }

        debug!(base, low_power, high_power, degree, "Built codec parameters");

        Ok(Self {
            base,
            low_power,
            high_power,
            degree,
            scale: OnceLock::new(),
            message_space: OnceLock::new(),
        })
    }

    /// Radix of the balanced expansion.
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Most negative exponent represented.
    pub fn low_power(&self) -> i64 {
        self.low_power
    }

    /// Largest exponent represented.
    pub fn high_power(&self) -> i64 {
        self.high_power
    }

    /// Total length of an emitted code.
    pub fn degree(&self) -> usize {
        self.degree as usize
    }

    /// `|low_power|`, the number of base-`b` places after the radix point.
    pub fn precision(&self) -> usize {
        self.low_power.unsigned_abs() as usize
    }

    /// Number of active digits, `high_power - low_power + 1`.
    pub fn polynomial_length(&self) -> usize {
        (self.high_power - self.low_power + 1) as usize
    }

    /// `base^|low_power|`, computed on first call.
    pub fn scale(&self) -> &BigInt {
        self.scale.get_or_init(|| pow(self.base, self.precision()))
    }

    /// Admissible range of scaled numerators, computed on first call.
    pub fn message_space(&self) -> &MessageSpace {
        self.message_space
            .get_or_init(|| MessageSpace::derive(self.base, self.polynomial_length()))
    }
}

/// Free-function form of [`Parameters::new`].
pub fn new_parameters(
    base: i64,
    low_power: i64,
    high_power: i64,
    degree: i64,
) -> Result<Parameters, ParameterError> {
    Parameters::new(base, low_power, high_power, degree)
}

impl TryFrom<ParametersConfig> for Parameters {
    type Error = ParameterError;

    fn try_from(config: ParametersConfig) -> Result<Self, Self::Error> {
        Parameters::new(
            config.base,
            config.low_power,
            config.high_power,
            config.degree,
        )
    }
}

impl From<Parameters> for ParametersConfig {
    fn from(params: Parameters) -> Self {
        Self {
            base: params.base,
            low_power: params.low_power,
            high_power: params.high_power,
            degree: params.degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = Parameters::new(10, -4, 11, 16).unwrap();
        assert_eq!(params.base(), 10);
        assert_eq!(params.low_power(), -4);
        assert_eq!(params.high_power(), 11);
        assert_eq!(params.degree(), 16);
        assert_eq!(params.precision(), 4);
        assert_eq!(params.polynomial_length(), 16);
        assert_eq!(params.scale(), &BigInt::from(10000));
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(
            Parameters::new(1, -4, 1, 8),
            Err(ParameterError::InvalidBase { base: 1 })
        );
        assert_eq!(
            Parameters::new(-10, -4, 1, 8),
            Err(ParameterError::InvalidBase { base: -10 })
        );
    }

    #[test]
    fn test_low_power_not_below_high_power() {
        assert_eq!(
            Parameters::new(10, 1, 1, 0),
            Err(ParameterError::LowPowerNotBelowHighPower {
                low_power: 1,
                high_power: 1
            })
        );
    }

    #[test]
    fn test_low_power_not_negative() {
        assert_eq!(
            Parameters::new(10, 0, 2, 0),
            Err(ParameterError::LowPowerNotNegative { low_power: 0 })
        );
    }

    #[test]
    fn test_high_power_not_positive() {
        assert_eq!(
            Parameters::new(10, -1, 0, 0),
            Err(ParameterError::HighPowerNotPositive { high_power: 0 })
        );
    }

    #[test]
    fn test_degree_too_small() {
        assert_eq!(
            Parameters::new(10, -4, 1, 0),
            Err(ParameterError::DegreeTooSmall { degree: 0 })
        );
    }

    #[test]
    fn test_degree_not_power_of_two() {
        assert_eq!(
            Parameters::new(10, -4, 1, 3),
            Err(ParameterError::DegreeNotPowerOfTwo { degree: 3 })
        );
        assert_eq!(
            Parameters::new(7, -4, 1, 12),
            Err(ParameterError::DegreeNotPowerOfTwo { degree: 12 })
        );
    }

    #[test]
    fn test_degree_too_small_for_range() {
        assert_eq!(
            Parameters::new(10, -1, 9, 8),
            Err(ParameterError::DegreeTooSmallForRange {
                degree: 8,
                high_power: 9,
                low_power: -1
            })
        );
        // degree == high_power + |low_power| is still too small.
        assert!(matches!(
            Parameters::new(10, -4, 4, 8),
            Err(ParameterError::DegreeTooSmallForRange { .. })
        ));
        assert!(Parameters::new(10, -4, 3, 8).is_ok());
    }

    #[test]
    fn test_extreme_powers_do_not_overflow() {
        assert!(matches!(
            Parameters::new(10, i64::MIN, i64::MAX, 1 << 62),
            Err(ParameterError::DegreeTooSmallForRange { .. })
        ));
    }

    #[test]
    fn test_huge_powers_construct_without_allocating() {
        // 2^(2^40) would need 128 GiB; nothing is computed until scale() is called.
        let params = Parameters::new(2, -(1 << 40), 1, 1 << 41).unwrap();
        assert_eq!(params.precision(), 1 << 40);
        assert_eq!(params.polynomial_length(), (1 << 40) + 2);
        assert_eq!(params.degree(), 1 << 41);
        assert_eq!(params, Parameters::new(2, -(1 << 40), 1, 1 << 41).unwrap());
    }

    #[test]
    fn test_equality_ignores_cached_values() {
        let cached = Parameters::new(10, -4, 11, 16).unwrap();
        let _ = cached.scale();
        let _ = cached.message_space();
        let fresh = Parameters::new(10, -4, 11, 16).unwrap();
        assert_eq!(cached, fresh);
        assert_eq!(cached.clone().message_space(), fresh.message_space());
        assert_ne!(cached, Parameters::new(10, -4, 11, 32).unwrap());
    }

    #[test]
    fn test_config_round_trip() {
        let config = ParametersConfig {
            base: 7,
            low_power: -4,
            high_power: 1,
            degree: 8,
        };
        let params = Parameters::try_from(config).unwrap();
        assert_eq!(ParametersConfig::from(params), config);

        let invalid = ParametersConfig { degree: 6, ..config };
        assert_eq!(
            Parameters::try_from(invalid),
            Err(ParameterError::DegreeNotPowerOfTwo { degree: 6 })
        );
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;
        use bincode;

        #[test]
        fn test_parameters_bincode_serialization() {
            let params = Parameters::new(11, -3, 6, 16).unwrap();
            let bytes = bincode::serialize(&params).expect("Failed to serialize");
            let reconstructed: Parameters =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(params, reconstructed);
            assert_eq!(params.message_space(), reconstructed.message_space());
        }

        #[test]
        fn test_invalid_config_is_rejected_on_deserialize() {
            let config = ParametersConfig {
                base: 10,
                low_power: -4,
                high_power: 11,
                degree: 15,
            };
            let bytes = bincode::serialize(&config).expect("Failed to serialize");
            let result: Result<Parameters, _> = bincode::deserialize(&bytes);
            assert!(result.is_err());
        }
    }
}
