// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Cipher, check_modulus, in_alphabet};
use crate::error::{Error, Result};
use crate::math::reduce;

/// Polyalphabetic (Vigenère) cipher.
///
/// Position `i` of the message is shifted by `key[i mod key.len()]`. The key
/// index advances on every position, including values outside
/// `[0, modulus)`, which are passed through untouched.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PolyalphabeticCipher {
    key: Vec<i64>,

    #[zeroize(skip)]
    modulus: i64,
}

impl PolyalphabeticCipher {
    pub(crate) fn new(key: Vec<i64>, modulus: i64) -> Result<Self> {
        check_modulus(modulus)?;
        if key.is_empty() {
            return Err(Error::InvalidKey("key stream must not be empty".into()));
        }

        tracing::debug!(modulus, key_len = key.len(), "constructed polyalphabetic cipher");
        Ok(Self { key, modulus })
    }

    #[inline]
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    fn apply(&self, values: &[i64], sign: i128) -> Vec<i64> {
        values
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(&v, &k)| {
                if in_alphabet(v, self.modulus) {
                    reduce(v as i128 + sign * k as i128, self.modulus)
                } else {
                    v
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for PolyalphabeticCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolyalphabeticCipher")
            .field("key_len", &self.key.len())
            .field("modulus", &self.modulus)
            .finish()
    }
}

impl Cipher for PolyalphabeticCipher {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = plaintext.len(), "polyalphabetic encrypt");
        Ok(self.apply(plaintext, 1))
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = ciphertext.len(), "polyalphabetic decrypt");
        Ok(self.apply(ciphertext, -1))
    }
}
