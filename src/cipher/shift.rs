// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Cipher, check_modulus, in_alphabet};
use crate::error::Result;
use crate::math::reduce;

/// Shift (Caesar) cipher: every symbol moves `key` places around the alphabet.
///
/// Values outside `[0, modulus)` are passed through untouched in both
/// directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCipher {
    key: i64,
    modulus: i64,
}

impl ShiftCipher {
    pub(crate) fn new(key: i64, modulus: i64) -> Result<Self> {
        check_modulus(modulus)?;
        tracing::debug!(modulus, "constructed shift cipher");
        Ok(Self { key, modulus })
    }

    #[inline]
    pub fn key(&self) -> i64 {
        self.key
    }

    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    fn shift(&self, values: &[i64], offset: i128) -> Vec<i64> {
        values
            .iter()
            .map(|&v| {
                if in_alphabet(v, self.modulus) {
                    reduce(v as i128 + offset, self.modulus)
                } else {
                    v
                }
            })
            .collect()
    }
}

impl Cipher for ShiftCipher {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = plaintext.len(), "shift encrypt");
        Ok(self.shift(plaintext, self.key as i128))
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = ciphertext.len(), "shift decrypt");
        Ok(self.shift(ciphertext, -(self.key as i128)))
    }
}
