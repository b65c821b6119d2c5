// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random key material for the one-time pad and public-key ciphers.

use num_bigint_dig::RandPrime;
use num_traits::ToPrimitive;
use rand::Rng;
use rand::rngs::OsRng;

use crate::cipher::check_modulus;
use crate::math;
use crate::{Error, Result};

/// Smallest prime size that still leaves room for two distinct primes.
pub const MIN_PRIME_BITS: usize = 8;

/// Largest prime size for which `p·q` and every intermediate product fits
/// the 64-bit symbol type.
pub const MAX_PRIME_BITS: usize = 31;

const PREFERRED_EXPONENT: i64 = 65_537;
const MAX_PRIME_ATTEMPTS: usize = 64;

/// Parameters for [`CipherFactory::public_key`](crate::CipherFactory::public_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyParams {
    pub p: i64,
    pub q: i64,
    pub e: i64,
}

/// Draws `len` symbols uniformly from `[0, modulus)` using the OS RNG.
pub fn random_pad(len: usize, modulus: i64) -> Result<Vec<i64>> {
    check_modulus(modulus)?;

    let mut rng = OsRng;
    Ok((0..len).map(|_| rng.gen_range(0..modulus)).collect())
}

fn random_prime(bits: usize) -> Result<i64> {
    let mut rng = OsRng;
    rng.gen_prime(bits).to_i64().ok_or(Error::ArithmeticOverflow)
}

/// Generates two distinct random primes of `prime_bits` bits and a public
/// exponent coprime to `(p-1)(q-1)`.
///
/// 65537 is used whenever it fits, otherwise the smallest odd coprime
/// exponent from 3 upward.
pub fn random_public_key_params(prime_bits: usize) -> Result<PublicKeyParams> {
    if !(MIN_PRIME_BITS..=MAX_PRIME_BITS).contains(&prime_bits) {
        return Err(Error::InvalidKey(format!(
            "prime size must be in {MIN_PRIME_BITS}..={MAX_PRIME_BITS} bits, got {prime_bits}"
        )));
    }

    let p = random_prime(prime_bits)?;
    let mut q = random_prime(prime_bits)?;
    let mut attempts = 1;
    while q == p {
        if attempts == MAX_PRIME_ATTEMPTS {
            return Err(Error::InvalidKey("could not draw two distinct primes".into()));
        }
        q = random_prime(prime_bits)?;
        attempts += 1;
    }

    let phi = (p - 1) * (q - 1);
    let e = if PREFERRED_EXPONENT < phi && math::gcd(PREFERRED_EXPONENT, phi)? == 1 {
        PREFERRED_EXPONENT
    } else {
        (3..phi)
            .step_by(2)
            .find(|&candidate| matches!(math::gcd(candidate, phi), Ok(1)))
            .ok_or_else(|| Error::InvalidKey(format!("no public exponent coprime to {phi}")))?
    };

    tracing::debug!(prime_bits, modulus = p * q, exponent = e, "generated public-key parameters");
    Ok(PublicKeyParams { p, q, e })
}
