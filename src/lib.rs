// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Classic Ciphers
//!
//! Pedagogical ciphers over integer alphabets `[0, n)` and the discrete math
//! they are built on: gcd, canonical residues, modular exponentiation and
//! modular inverses via the extended Euclidean algorithm.
//!
//! | Cipher | encrypt | decrypt | out-of-range values |
//! |--------|---------|---------|---------------------|
//! | [`ShiftCipher`] | `x + k` | `y - k` | passed through |
//! | [`AffineCipher`] | `a·x + b` | `a⁻¹·(y - b)` | transformed |
//! | [`PolyalphabeticCipher`] | `x[i] + k[i mod L]` | `y[i] - k[i mod L]` | passed through |
//! | [`OneTimePadCipher`] | `x[i] + pad[i]` | `y[i] - pad[i]` | transformed, single use |
//! | [`PublicKeyCipher`] | `x^e` | `y^d` | transformed |
//!
//! ## Security
//!
//! None of this is fit for protecting real data. Moduli are small, there is
//! no padding, and no care is taken about timing.
//!
//! ## Example
//!
//! ```rust
//! use classic_ciphers::{Alphabet, Cipher, CipherFactory};
//!
//! let caesar = CipherFactory::shift(5, 26).unwrap();
//! assert_eq!(caesar.encrypt(&[0, 15, 15, 11, 4]).unwrap(), [5, 20, 20, 16, 9]);
//!
//! let latin = Alphabet::latin();
//! assert_eq!(latin.encrypt("apple", &caesar).unwrap(), "fuuqj");
//! ```

mod alphabet;
mod cipher;
mod config;
mod error;
mod factory;
pub mod keygen;
pub mod math;

pub use alphabet::*;
pub use cipher::*;
pub use config::*;
pub use error::*;
pub use factory::*;
