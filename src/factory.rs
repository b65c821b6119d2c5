// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cipher::{
    AffineCipher, OneTimePadCipher, PolyalphabeticCipher, PublicKeyCipher, ShiftCipher,
};
use crate::error::Result;
use crate::keygen;

/// Entry point for building configured ciphers.
///
/// Every constructor validates its parameters up front; on error no cipher
/// instance exists.
pub struct CipherFactory;

impl CipherFactory {
    /// Shift cipher with an arbitrary integer `key` over `[0, modulus)`.
    pub fn shift(key: i64, modulus: i64) -> Result<ShiftCipher> {
        ShiftCipher::new(key, modulus)
    }

    /// Affine cipher `a·x + b mod modulus`.
    ///
    /// Fails with `NotInvertible` unless `gcd(a, modulus) = 1`.
    pub fn affine(a: i64, b: i64, modulus: i64) -> Result<AffineCipher> {
        AffineCipher::new(a, b, modulus)
    }

    /// Polyalphabetic cipher with a repeating key stream.
    ///
    /// Fails with `InvalidKey` if `key` is empty.
    pub fn polyalphabetic<K: Into<Vec<i64>>>(
        key: K,
        modulus: i64,
    ) -> Result<PolyalphabeticCipher> {
        PolyalphabeticCipher::new(key.into(), modulus)
    }

    /// Single-use one-time pad cipher.
    ///
    /// Fails with `InvalidKey` if `pad` is empty.
    pub fn one_time_pad<P: Into<Vec<i64>>>(
        pad: P,
        modulus: i64,
    ) -> Result<OneTimePadCipher> {
        OneTimePadCipher::new(pad.into(), modulus)
    }

    /// Textbook RSA from two distinct primes and a public exponent.
    ///
    /// Fails with `NotInvertible` unless `gcd(e, (p-1)(q-1)) = 1`.
    pub fn public_key(p: i64, q: i64, e: i64) -> Result<PublicKeyCipher> {
        PublicKeyCipher::new(p, q, e)
    }

    /// One-time pad over a freshly drawn uniform pad of `len` symbols.
    pub fn random_one_time_pad(len: usize, modulus: i64) -> Result<OneTimePadCipher> {
        let pad = keygen::random_pad(len, modulus)?;
        OneTimePadCipher::new(pad, modulus)
    }

    /// Public-key cipher over two fresh random primes of `prime_bits` bits each.
    pub fn random_public_key(prime_bits: usize) -> Result<PublicKeyCipher> {
        let params = keygen::random_public_key_params(prime_bits)?;
        PublicKeyCipher::new(params.p, params.q, params.e)
    }
}
