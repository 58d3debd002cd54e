// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use e3_laurent_codec::{
    decode, encode, encode_fraction, expansion, BigInt, BigRational, ParameterError, Parameters,
};
use proptest::prelude::*;

/// Valid parameters: the degree is the smallest power of two above the power range,
/// optionally doubled.
fn parameters() -> impl Strategy<Value = Parameters> {
    (2i64..=16, 1i64..=6, 1i64..=8, 0u32..=1).prop_map(|(base, low, high, extra)| {
        let mut degree = 1i64;
        while degree <= high + low {
            degree *= 2;
        }
        Parameters::new(base, -low, high, degree << extra).unwrap()
    })
}

/// Parameters together with a numerator spread over their whole message space.
fn parameters_and_numerator() -> impl Strategy<Value = (Parameters, BigInt)> {
    (parameters(), any::<u64>()).prop_map(|(params, position)| {
        let space = params.message_space();
        let width = space.upper() - space.lower();
        let numerator = space.lower() + width * BigInt::from(position) / BigInt::from(u64::MAX);
        (params, numerator)
    })
}

proptest! {
    #[test]
    fn exact_round_trip((params, numerator) in parameters_and_numerator()) {
        let code = encode_fraction(&numerator, params.scale(), &params).unwrap();
        let decoded = decode(&code, &params).unwrap();
        prop_assert_eq!(decoded, BigRational::new(numerator, params.scale().clone()));
    }

    #[test]
    fn message_space_edges_round_trip(params in parameters()) {
        for bound in [params.message_space().lower(), params.message_space().upper()] {
            let fraction = BigRational::new(bound.clone(), params.scale().clone());
            let code = encode(&fraction, &params).unwrap();
            prop_assert_eq!(decode(&code, &params).unwrap(), fraction);
        }
    }

    #[test]
    fn digits_are_balanced((params, numerator) in parameters_and_numerator()) {
        let digits = expansion(&numerator, &params).unwrap();
        let base = params.base();
        prop_assert_eq!(digits.len(), params.polynomial_length());
        for digit in digits {
            prop_assert!(2 * digit >= -base && 2 * digit < base);
        }
    }

    #[test]
    fn code_has_configured_degree((params, numerator) in parameters_and_numerator()) {
        let code = encode_fraction(&numerator, params.scale(), &params).unwrap();
        prop_assert_eq!(code.len(), params.degree());
        prop_assert!(code.len().is_power_of_two());
    }

    #[test]
    fn validation_matches_rules(
        base in -2i64..=12,
        low in -10i64..=3,
        high in -3i64..=10,
        degree in -2i64..=40,
    ) {
        let expected = if base < 2 {
            Err(ParameterError::InvalidBase { base })
        } else if low >= high {
            Err(ParameterError::LowPowerNotBelowHighPower { low_power: low, high_power: high })
        } else if low >= 0 {
            Err(ParameterError::LowPowerNotNegative { low_power: low })
        } else if high <= 0 {
            Err(ParameterError::HighPowerNotPositive { high_power: high })
        } else if degree < 1 {
            Err(ParameterError::DegreeTooSmall { degree })
        } else if degree & (degree - 1) != 0 {
            Err(ParameterError::DegreeNotPowerOfTwo { degree })
        } else if degree <= high - low {
            Err(ParameterError::DegreeTooSmallForRange { degree, high_power: high, low_power: low })
        } else {
            Ok(())
        };

        let actual = Parameters::new(base, low, high, degree).map(|_| ());
        prop_assert_eq!(actual, expected);
    }
}
