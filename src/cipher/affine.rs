// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Cipher, check_modulus};
use crate::error::{Error, Result};
use crate::math::{self, reduce};

/// Affine cipher `x -> a·x + b (mod n)`.
///
/// The transform is applied to every element, including values outside
/// `[0, modulus)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineCipher {
    a: i64,
    b: i64,
    modulus: i64,

    /// Cached a⁻¹ mod n
    a_inv: i64,
}

impl AffineCipher {
    pub(crate) fn new(a: i64, b: i64, modulus: i64) -> Result<Self> {
        check_modulus(modulus)?;

        let a_reduced = reduce(a as i128, modulus);
        let a_inv = if modulus == 1 {
            0
        } else if a_reduced == 0 {
            return Err(Error::NotInvertible { value: a, modulus });
        } else {
            math::mod_inverse(a_reduced, modulus).map_err(|e| match e {
                Error::NotInvertible { .. } => Error::NotInvertible { value: a, modulus },
                other => other,
            })?
        };

        tracing::debug!(modulus, "constructed affine cipher");
        Ok(Self { a, b, modulus, a_inv })
    }

    #[inline]
    pub fn a(&self) -> i64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> i64 {
        self.b
    }

    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    #[inline]
    pub fn a_inverse(&self) -> i64 {
        self.a_inv
    }
}

impl Cipher for AffineCipher {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = plaintext.len(), "affine encrypt");
        Ok(plaintext
            .iter()
            .map(|&x| reduce(self.a as i128 * x as i128 + self.b as i128, self.modulus))
            .collect())
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = ciphertext.len(), "affine decrypt");
        Ok(ciphertext
            .iter()
            .map(|&y| {
                // reduce y - b first so the product stays well inside i128
                let shifted = reduce(y as i128 - self.b as i128, self.modulus);
                reduce(self.a_inv as i128 * shifted as i128, self.modulus)
            })
            .collect())
    }
}
