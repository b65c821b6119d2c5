// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors raised by the number theory layer, the ciphers and the alphabet.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Illegal value {value} for {name}: it must be positive")]
    Domain { name: &'static str, value: i64 },

    #[error("{value} has no inverse modulo {modulus}: gcd({value}, {modulus}) != 1")]
    NotInvertible { value: i64, modulus: i64 },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("This one-time pad has already been used")]
    PadExhausted,

    #[error("One-time pad too short: message has {needed} symbols, pad has {available}")]
    InsufficientPad { needed: usize, available: usize },

    #[error("Unregistered symbol: {0:?}")]
    UnregisteredSymbol(char),

    #[error("Unregistered value: {0}")]
    UnregisteredValue(i64),

    #[error("Symbol {0:?} is registered more than once")]
    DuplicateSymbol(char),

    #[error("Value {value} is mapped to both {first:?} and {second:?}")]
    DuplicateValue { value: i64, first: char, second: char },

    #[error("Arithmetic overflow detected")]
    ArithmeticOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
