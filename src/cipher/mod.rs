// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod affine;
mod one_time_pad;
mod polyalphabetic;
mod public_key;
mod shift;

pub use affine::AffineCipher;
pub use one_time_pad::{OneTimePadCipher, PadState};
pub use polyalphabetic::PolyalphabeticCipher;
pub use public_key::PublicKeyCipher;
pub use shift::ShiftCipher;

use crate::error::{Error, Result};

/// Encrypts and decrypts sequences of symbol indices.
///
/// Both directions return a new sequence of the same length as their input.
/// For a fixed instance, `decrypt` undoes `encrypt` for every sequence of
/// values in `[0, modulus)`.
pub trait Cipher: Send + Sync {
    /// Transform a plaintext sequence into ciphertext.
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>>;

    /// Recover the plaintext sequence from ciphertext.
    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>>;
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        (**self).decrypt(ciphertext)
    }
}

/// Whether `value` is a symbol of the alphabet `[0, modulus)`.
#[inline]
pub(crate) fn in_alphabet(value: i64, modulus: i64) -> bool {
    (0..modulus).contains(&value)
}

#[inline]
pub(crate) fn check_modulus(modulus: i64) -> Result<()> {
    if modulus <= 0 {
        return Err(Error::Domain {
            name: "modulus",
            value: modulus,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::CipherFactory;

    fn all_variants() -> Vec<Box<dyn Cipher>> {
        vec![
            Box::new(CipherFactory::shift(5, 26).unwrap()),
            Box::new(CipherFactory::affine(5, 7, 26).unwrap()),
            Box::new(CipherFactory::polyalphabetic(vec![10, 4, 24], 26).unwrap()),
            Box::new(CipherFactory::public_key(7, 13, 5).unwrap()),
        ]
    }

    #[test]
    fn trait_objects_round_trip() {
        let message = [0, 15, 15, 11, 4];
        for cipher in all_variants() {
            let ciphertext = cipher.encrypt(&message).unwrap();
            assert_eq!(ciphertext.len(), message.len());
            assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
        }
    }

    #[test]
    fn empty_sequences_stay_empty() {
        for cipher in all_variants() {
            assert!(cipher.encrypt(&[]).unwrap().is_empty());
            assert!(cipher.decrypt(&[]).unwrap().is_empty());
        }
    }

    #[test]
    fn boxed_one_time_pad_keeps_single_use() {
        let cipher: Box<dyn Cipher> =
            Box::new(CipherFactory::one_time_pad(vec![1, 2, 3], 26).unwrap());
        assert_eq!(cipher.encrypt(&[0, 0, 0]).unwrap(), [1, 2, 3]);
        assert_eq!(cipher.decrypt(&[1, 2, 3]), Err(Error::PadExhausted));
    }

    #[test]
    fn alphabet_bounds() {
        assert!(in_alphabet(0, 26));
        assert!(in_alphabet(25, 26));
        assert!(!in_alphabet(26, 26));
        assert!(!in_alphabet(-1, 26));
    }
}
