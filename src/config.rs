// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::cipher::Cipher;
use crate::error::Result;
use crate::factory::CipherFactory;

/// Serializable description of a cipher.
///
/// Holds only the caller-supplied parameters; derived values such as a⁻¹ or
/// the private exponent are recomputed by [`CipherConfig::build`].
///
/// ```json
/// { "kind": "affine", "a": 5, "b": 7, "modulus": 26 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum CipherConfig {
    Shift { key: i64, modulus: i64 },
    Affine { a: i64, b: i64, modulus: i64 },
    Polyalphabetic { key: Vec<i64>, modulus: i64 },
    OneTimePad { pad: Vec<i64>, modulus: i64 },
    PublicKey { p: i64, q: i64, e: i64 },
}

impl CipherConfig {
    /// Validates the parameters and constructs the cipher.
    pub fn build(&self) -> Result<Box<dyn Cipher>> {
        let cipher: Box<dyn Cipher> = match self {
            Self::Shift { key, modulus } => Box::new(CipherFactory::shift(*key, *modulus)?),
            Self::Affine { a, b, modulus } => Box::new(CipherFactory::affine(*a, *b, *modulus)?),
            Self::Polyalphabetic { key, modulus } => {
                Box::new(CipherFactory::polyalphabetic(key.as_slice(), *modulus)?)
            }
            Self::OneTimePad { pad, modulus } => {
                Box::new(CipherFactory::one_time_pad(pad.as_slice(), *modulus)?)
            }
            Self::PublicKey { p, q, e } => Box::new(CipherFactory::public_key(*p, *q, *e)?),
        };
        tracing::debug!(kind = self.kind(), "built cipher from config");
        Ok(cipher)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Shift { .. } => "shift",
            Self::Affine { .. } => "affine",
            Self::Polyalphabetic { .. } => "polyalphabetic",
            Self::OneTimePad { .. } => "one_time_pad",
            Self::PublicKey { .. } => "public_key",
        }
    }
}
