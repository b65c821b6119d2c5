// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Cipher, check_modulus};
use crate::error::{Error, Result};
use crate::math::reduce;

/// Lifecycle of a one-time pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadState {
    /// Never used; the next encrypt or decrypt call may proceed
    Fresh,
    /// Consumed by an earlier call; every further call fails
    Spent,
}

/// One-time pad cipher.
///
/// The pad is consumed by the first successful `encrypt` or `decrypt` call,
/// whatever its length (an empty message spends it too). Every later call
/// fails with [`Error::PadExhausted`]. The Fresh -> Spent transition is a
/// single compare-and-swap, so among concurrent callers on a shared instance
/// exactly one wins.
///
/// A call rejected with [`Error::InsufficientPad`] leaves the pad fresh.
/// The length check runs before the swap, so an over-long call racing a
/// winner may still report `InsufficientPad` rather than `PadExhausted`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OneTimePadCipher {
    pad: Vec<i64>,

    #[zeroize(skip)]
    modulus: i64,

    #[zeroize(skip)]
    spent: AtomicBool,
}

impl OneTimePadCipher {
    pub(crate) fn new(pad: Vec<i64>, modulus: i64) -> Result<Self> {
        check_modulus(modulus)?;
        if pad.is_empty() {
            return Err(Error::InvalidKey("one-time pad must not be empty".into()));
        }

        tracing::debug!(modulus, pad_len = pad.len(), "constructed one-time pad cipher");
        Ok(Self {
            pad,
            modulus,
            spent: AtomicBool::new(false),
        })
    }

    #[inline]
    pub fn pad_len(&self) -> usize {
        self.pad.len()
    }

    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn state(&self) -> PadState {
        if self.spent.load(Ordering::Acquire) {
            PadState::Spent
        } else {
            PadState::Fresh
        }
    }

    /// Checks the call preconditions and flips the pad to spent.
    fn claim(&self, len: usize) -> Result<()> {
        if self.spent.load(Ordering::Acquire) {
            tracing::warn!("attempt to reuse a spent one-time pad");
            return Err(Error::PadExhausted);
        }

        if len > self.pad.len() {
            tracing::warn!(needed = len, available = self.pad.len(), "one-time pad too short");
            return Err(Error::InsufficientPad {
                needed: len,
                available: self.pad.len(),
            });
        }

        self.spent
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| {
                tracing::warn!("lost the race for a one-time pad");
                Error::PadExhausted
            })
    }

    fn apply(&self, values: &[i64], sign: i128) -> Result<Vec<i64>> {
        self.claim(values.len())?;

        Ok(values
            .iter()
            .zip(&self.pad)
            .map(|(&v, &p)| reduce(v as i128 + sign * p as i128, self.modulus))
            .collect())
    }
}

impl std::fmt::Debug for OneTimePadCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneTimePadCipher")
            .field("pad_len", &self.pad.len())
            .field("modulus", &self.modulus)
            .field("state", &self.state())
            .finish()
    }
}

impl Cipher for OneTimePadCipher {
    fn encrypt(&self, plaintext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = plaintext.len(), "one-time pad encrypt");
        self.apply(plaintext, 1)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>> {
        tracing::trace!(len = ciphertext.len(), "one-time pad decrypt");
        self.apply(ciphertext, -1)
    }
}
