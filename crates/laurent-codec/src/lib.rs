// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Laurent Codec
//!
//! A reversible encoding of exact rational numbers as fixed-length vectors of small signed
//! integers, suitable as plaintext polynomials for lattice-based homomorphic encryption.
//!
//! ## Encoding
//!
//! A fraction `n / b^|p|` is expanded into balanced base-`b` digits
//!
//! `n / b^|p| = Σ digit_i · b^i`,  `i ∈ [p, q]`,  `digit_i ∈ [-b/2, b/2)`
//!
//! and the digits are laid out in a code of length `d` (a power of two). Powers `0..=q` sit at
//! the front, zero padding follows, and the negative powers wrap to the tail with their sign
//! flipped, matching the identity `x^-k = -x^(d-k)` in `Z[x]/(x^d + 1)`.
//!
//! ## Features
//!
//! - Exact arithmetic throughout via `num-bigint` and `num` rationals.
//! - Validated, immutable [`Parameters`] shared by encoder and decoder.
//! - Message-space checks for both even and odd bases.
//! - Float entry points with truncating encode and round-up decode at `|p|` places.
//! - Serialization: optional serde support for [`Parameters`] with bincode integration.
//!
//! ## Example
//!
//! ```
//! use e3_laurent_codec::{decode_f64, encode_f64, Parameters};
//!
//! let params = Parameters::new(10, -4, 11, 16).unwrap();
//! let code = encode_f64(98123.45, &params).unwrap();
//! assert_eq!(code, vec![4, 2, 1, -2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 5, 5]);
//! assert_eq!(decode_f64(&code, &params).unwrap(), 98123.45);
//! ```

pub mod decode;
pub mod encode;
pub mod errors;
pub mod expansion;
pub mod parameters;
pub mod utils;
pub mod validate;

pub use decode::{ascending_digits, decode, decode_f64, dot_product, evaluation_powers};
pub use encode::{encode, encode_f64, encode_fraction, generate_code};
pub use errors::{ArithmeticError, DecodeError, EncodeError, ParameterError};
pub use expansion::{expansion, recompose};
pub use parameters::{new_parameters, Parameters, ParametersConfig};
pub use utils::*;
pub use validate::{validate_code_degree, MessageSpace};

pub use num::BigRational;
pub use num_bigint::BigInt;
