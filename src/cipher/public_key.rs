// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Cipher;
use crate::error::{Error, Result};
use crate::math::{self, reduce};

/// Miller-Rabin rounds used to validate the caller's primes.
const PRIMALITY_ROUNDS: usize = 20;

/// Textbook RSA over single symbols: `x -> x^e mod n`, `y -> y^d mod n`.
///
/// `n = p·q` and `d = e⁻¹ mod (p-1)(q-1)`. The primes themselves are not kept.
/// Every element is reduced modulo `n` before exponentiation, so values
/// outside `[0, n)` are transformed rather than passed through.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PublicKeyCipher {
    #[zeroize(skip)]
    n: i64,

    #[zeroize(skip)]
    e: i64,

    /// Private exponent e⁻¹ mod φ(n)
    pub(crate) d: i64,
}

fn check_prime(name: &'static str, value: i64) -> Result<()> {
    if value <= 1 {
        return Err(Error::Domain { name, value });
    }
    if !probably_prime(&BigUint::from(value as u64), PRIMALITY_ROUNDS) {
        return Err(Error::InvalidKey(format!("{name} = {value} is not prime")));
    }
    Ok(())
}

impl PublicKeyCipher {
    pub(crate) fn new(p: i64, q: i64, e: i64) -> Result<Self> {
        check_prime("p", p)?;
        check_prime("q", q)?;
        if p == q {
            return Err(Error::InvalidKey("primes must be distinct".into()));
        }
        if e <= 0 {
            return Err(Error::Domain { name: "e", value: e });
        }

        let n = p.checked_mul(q).ok_or(Error::ArithmeticOverflow)?;
        let phi = (p - 1) * (q - 1);
        let d = math::mod_inverse(e, phi)?;

        tracing::debug!(modulus = n, exponent = e, "constructed public-key cipher");
        Ok(Self { n, e, d })
    }

    /// The public modulus `n = p·q`.
    #[inline]
    pub fn modulus(&self) -> i64 {
        self.n
    }

    /// The public exponent `e`.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.e
    }

    fn transform(&self, values: &[i64], exponent: i64) -> Result<Vec<i64>> {
        values
            .iter()
            .map(|&v| match reduce(v as i128, self.n) {
                0 => Ok(0),
                base => math::mod_pow(base, exponent, self.n),
            })
            .collect()
    }
}

impl std::fmt::Debug for PublicKeyCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKeyCipher")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

impl Cipher for PublicKeyCipher {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = plaintext.len(), "public-key encrypt");
        self.transform(plaintext, self.e)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = ciphertext.len(), "public-key decrypt");
        self.transform(ciphertext, self.d)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_textbook_key() {
        let cipher = PublicKeyCipher::new(7, 13, 5).unwrap();
        assert_eq!(cipher.modulus(), 91);
        assert_eq!(cipher.d, 29);
        assert_eq!(cipher.encrypt(&[2]).unwrap(), [32]);
        assert_eq!(cipher.decrypt(&[32]).unwrap(), [2]);
    }

    #[test]
    fn every_residue_round_trips() {
        let cipher = PublicKeyCipher::new(7, 13, 5).unwrap();
        let all: Vec<i64> = (0..91).collect();
        let ciphertext = cipher.encrypt(&all).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), all);
    }

    #[test]
    fn reduces_out_of_range_values() {
        let cipher = PublicKeyCipher::new(7, 13, 5).unwrap();
        // 'a' under ASCII is 97 ≡ 6 (mod 91), 6^5 = 7776 ≡ 41
        assert_eq!(cipher.encrypt(&[97, 91, -89]).unwrap(), [41, 0, 32]);
    }

    #[test]
    fn rejects_exponent_sharing_factor_with_phi() {
        // φ = 6 · 12 = 72
        assert_eq!(
            PublicKeyCipher::new(7, 13, 6),
            Err(Error::NotInvertible { value: 6, modulus: 72 })
        );
    }

    #[test]
    fn rejects_bad_primes() {
        assert!(matches!(PublicKeyCipher::new(1, 13, 5), Err(Error::Domain { name: "p", .. })));
        assert!(matches!(PublicKeyCipher::new(7, -13, 5), Err(Error::Domain { name: "q", .. })));
        assert!(matches!(PublicKeyCipher::new(9, 13, 5), Err(Error::InvalidKey(_))));
        assert!(matches!(PublicKeyCipher::new(13, 13, 5), Err(Error::InvalidKey(_))));
        assert!(matches!(PublicKeyCipher::new(7, 13, 0), Err(Error::Domain { name: "e", .. })));
    }

    #[test]
    fn rejects_overflowing_modulus() {
        // 2^61 - 1 is a Mersenne prime
        let p = (1i64 << 61) - 1;
        assert_eq!(PublicKeyCipher::new(p, 7, 65_537), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn wide_modulus_round_trips() {
        // p·q needs 63 bits, so intermediate squares need a 128-bit accumulator
        let cipher = PublicKeyCipher::new(2_147_483_647, 4_294_967_291, 65_537).unwrap();
        let message = [0, 1, 42, 123_456_789, cipher.modulus() - 1];
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn debug_omits_private_exponent() {
        let cipher = PublicKeyCipher::new(7, 13, 5).unwrap();
        assert_eq!(format!("{cipher:?}"), "PublicKeyCipher { n: 91, e: 5, .. }");
    }

    proptest! {
        #[test]
        fn round_trip(
            (p, q) in prop::sample::select(vec![
                (11i64, 17i64),
                (61, 53),
                (101, 113),
                (1_009, 1_013),
                (65_521, 65_519),
            ]),
            e in prop::sample::select(vec![3i64, 5, 7, 17, 257, 65_537]),
            seed in any::<i64>(),
        ) {
            let cipher = match PublicKeyCipher::new(p, q, e) {
                Ok(c) => c,
                Err(err) => {
                    prop_assert!(
                        matches!(err, Error::NotInvertible { .. }),
                        "unexpected error {:?}",
                        err
                    );
                    return Ok(());
                }
            };
            let x = seed.rem_euclid(p * q);
            prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&[x]).unwrap()).unwrap(), vec![x]);
        }
    }
}
