// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-to-one mapping between characters and symbol indices, so text can be
//! fed through the integer ciphers.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::cipher::Cipher;
use crate::error::{Error, Result};

static LATIN: OnceLock<Alphabet> = OnceLock::new();
static ASCII: OnceLock<Alphabet> = OnceLock::new();

/// Bidirectional `char <-> i64` lookup table.
///
/// Each value maps back to exactly one character. A case-insensitive
/// alphabet additionally accepts the other case of every registered letter
/// when decoding; encoding always yields the registered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: HashMap<char, i64>,
    values: BTreeMap<i64, char>,
}

/// The single-character opposite case of `c`, if it has one.
fn other_case(c: char) -> Option<char> {
    let mut swapped: Vec<char> = if c.is_lowercase() {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    };

    match (swapped.pop(), swapped.is_empty()) {
        (Some(o), true) if o != c => Some(o),
        _ => None,
    }
}

impl Alphabet {
    /// Builds an alphabet from `(char, value)` pairs.
    ///
    /// Fails if two characters share a value or a character appears twice.
    pub fn new<I: IntoIterator<Item = (char, i64)>>(mapping: I) -> Result<Self> {
        Self::build(mapping, false)
    }

    /// Like [`Alphabet::new`], but upper and lower case forms of each letter
    /// decode to the same value.
    pub fn case_insensitive<I: IntoIterator<Item = (char, i64)>>(mapping: I) -> Result<Self> {
        Self::build(mapping, true)
    }

    fn build<I: IntoIterator<Item = (char, i64)>>(mapping: I, ignore_case: bool) -> Result<Self> {
        let mut alphabet = Self {
            symbols: HashMap::new(),
            values: BTreeMap::new(),
        };

        for (c, value) in mapping {
            if let Some(&first) = alphabet.values.get(&value) {
                return Err(Error::DuplicateValue {
                    value,
                    first,
                    second: c,
                });
            }
            if alphabet.symbols.contains_key(&c) {
                return Err(Error::DuplicateSymbol(c));
            }

            alphabet.symbols.insert(c, value);
            alphabet.values.insert(value, c);

            if ignore_case && let Some(o) = other_case(c) {
                alphabet.symbols.insert(o, value);
            }
        }

        Ok(alphabet)
    }

    /// Case-insensitive `a..z -> 0..25`.
    pub fn latin() -> &'static Alphabet {
        LATIN.get_or_init(|| {
            let mut symbols = HashMap::with_capacity(52);
            let mut values = BTreeMap::new();
            for (i, c) in ('a'..='z').enumerate() {
                symbols.insert(c, i as i64);
                symbols.insert(c.to_ascii_uppercase(), i as i64);
                values.insert(i as i64, c);
            }
            Alphabet { symbols, values }
        })
    }

    /// The 128 ASCII code points mapped to their own codes.
    pub fn ascii() -> &'static Alphabet {
        ASCII.get_or_init(|| {
            let symbols = (0u8..128).map(|b| (char::from(b), b as i64)).collect();
            let values = (0u8..128).map(|b| (b as i64, char::from(b))).collect();
            Alphabet { symbols, values }
        })
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        self.symbols.contains_key(&c)
    }

    #[inline]
    pub fn contains_value(&self, value: i64) -> bool {
        self.values.contains_key(&value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every character the alphabet decodes, including case variants.
    pub fn char_map(&self) -> &HashMap<char, i64> {
        &self.symbols
    }

    /// Every value and the character it encodes to, in value order.
    pub fn value_map(&self) -> &BTreeMap<i64, char> {
        &self.values
    }

    pub fn decode_char(&self, c: char) -> Result<i64> {
        self.symbols
            .get(&c)
            .copied()
            .ok_or(Error::UnregisteredSymbol(c))
    }

    pub fn decode(&self, text: &str) -> Result<Vec<i64>> {
        text.chars().map(|c| self.decode_char(c)).collect()
    }

    pub fn encode_value(&self, value: i64) -> Result<char> {
        self.values
            .get(&value)
            .copied()
            .ok_or(Error::UnregisteredValue(value))
    }

    pub fn encode(&self, values: &[i64]) -> Result<String> {
        values.iter().map(|&v| self.encode_value(v)).collect()
    }

    /// `decode -> cipher.encrypt -> encode`.
    pub fn encrypt<C: Cipher + ?Sized>(&self, text: &str, cipher: &C) -> Result<String> {
        self.encode(&cipher.encrypt(&self.decode(text)?)?)
    }

    /// `decode -> cipher.decrypt -> encode`.
    pub fn decrypt<C: Cipher + ?Sized>(&self, text: &str, cipher: &C) -> Result<String> {
        self.encode(&cipher.decrypt(&self.decode(text)?)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::CipherFactory;

    #[test]
    fn latin_is_case_insensitive() {
        let latin = Alphabet::latin();
        assert_eq!(latin.len(), 26);
        assert_eq!(latin.char_map().len(), 52);
        assert_eq!(latin.decode("apple").unwrap(), [0, 15, 15, 11, 4]);
        assert_eq!(latin.decode("APPLE").unwrap(), [0, 15, 15, 11, 4]);
        assert_eq!(latin.encode(&[0, 15, 15, 11, 4]).unwrap(), "apple");
    }

    #[test]
    fn latin_matches_explicit_construction() {
        let built = Alphabet::case_insensitive(('a'..='z').zip(0..)).unwrap();
        assert_eq!(&built, Alphabet::latin());
    }

    #[test]
    fn ascii_identity() {
        let ascii = Alphabet::ascii();
        assert_eq!(ascii.len(), 128);
        assert_eq!(ascii.decode_char('a').unwrap(), 97);
        assert_eq!(ascii.encode_value(65).unwrap(), 'A');
        assert!(!ascii.contains_char('é'));
        assert!(!ascii.contains_value(128));
    }

    #[test]
    fn unregistered_lookups() {
        let latin = Alphabet::latin();
        assert_eq!(latin.decode("a b"), Err(Error::UnregisteredSymbol(' ')));
        assert_eq!(latin.encode_value(26), Err(Error::UnregisteredValue(26)));
        assert_eq!(latin.encode(&[0, -1]), Err(Error::UnregisteredValue(-1)));
    }

    #[test]
    fn rejects_non_injective_mapping() {
        assert_eq!(
            Alphabet::new([('x', 1), ('y', 1)]),
            Err(Error::DuplicateValue {
                value: 1,
                first: 'x',
                second: 'y'
            })
        );
        assert_eq!(
            Alphabet::new([('x', 1), ('x', 2)]),
            Err(Error::DuplicateSymbol('x'))
        );
    }

    #[test]
    fn case_sensitive_by_default() {
        let alphabet = Alphabet::new([('a', 0), ('B', 1)]).unwrap();
        assert!(alphabet.contains_char('a'));
        assert!(!alphabet.contains_char('A'));
        assert!(!alphabet.contains_char('b'));

        let folded = Alphabet::case_insensitive([('a', 0), ('B', 1)]).unwrap();
        assert_eq!(folded.decode("AbaB").unwrap(), [0, 1, 0, 1]);
        assert_eq!(folded.encode(&[0, 1]).unwrap(), "aB");
    }

    #[test]
    fn other_case_handles_non_letters() {
        assert_eq!(other_case('a'), Some('A'));
        assert_eq!(other_case('Z'), Some('z'));
        assert_eq!(other_case('3'), None);
        // 'ß' upper-cases to two characters
        assert_eq!(other_case('ß'), None);
    }

    #[test]
    fn text_round_trips() {
        let latin = Alphabet::latin();

        let caesar = CipherFactory::shift(5, 26).unwrap();
        assert_eq!(latin.encrypt("apple", &caesar).unwrap(), "fuuqj");
        assert_eq!(latin.decrypt("fuuqj", &caesar).unwrap(), "apple");
        assert_eq!(latin.encrypt("programmingisfun", &caesar).unwrap(), "uwtlwfrrnslnxkzs");

        let affine = CipherFactory::affine(5, 7, 26).unwrap();
        assert_eq!(latin.encrypt("apple", &affine).unwrap(), "heekb");
        assert_eq!(latin.decrypt("heekb", &affine).unwrap(), "apple");

        let vigenere = CipherFactory::polyalphabetic(latin.decode("key").unwrap(), 26).unwrap();
        assert_eq!(latin.encrypt("iloveapple", &vigenere).unwrap(), "spmfiyztjo");
        assert_eq!(latin.decrypt("spmfiyztjo", &vigenere).unwrap(), "iloveapple");
    }

    #[test]
    fn text_through_one_time_pads() {
        let latin = Alphabet::latin();
        let pad = latin.decode("onetimepad").unwrap();

        let sender = CipherFactory::one_time_pad(pad.clone(), 26).unwrap();
        let receiver = CipherFactory::one_time_pad(pad, 26).unwrap();

        assert_eq!(latin.encrypt("apple", &sender).unwrap(), "octem");
        assert_eq!(latin.decrypt("octem", &receiver).unwrap(), "apple");
        assert_eq!(latin.encrypt("apple", &sender), Err(Error::PadExhausted));
    }

    #[test]
    fn text_through_trait_object() {
        let cipher: Box<dyn Cipher> = Box::new(CipherFactory::public_key(7, 13, 5).unwrap());
        let ascii = Alphabet::ascii();
        // values below 91 are residues, so printable text in that range round-trips
        let ciphertext = ascii.encrypt("HELLO", cipher.as_ref()).unwrap();
        assert_eq!(ciphertext.chars().count(), 5);
        assert_eq!(ascii.decrypt(&ciphertext, cipher.as_ref()).unwrap(), "HELLO");
    }
}
