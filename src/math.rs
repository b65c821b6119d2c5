// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discrete math primitives shared by every cipher.
//!
//! All inputs are `i64`. Products are formed in `i128` so that modular
//! arithmetic over any positive 64-bit modulus never overflows.

use crate::{Error, Result};

#[inline]
fn check_positive(name: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(Error::Domain { name, value });
    }
    Ok(())
}

/// Canonical residue of a wide intermediate. `modulus` must be positive.
#[inline]
pub(crate) fn reduce(value: i128, modulus: i64) -> i64 {
    // rem_euclid lands in [0, modulus), which always fits back into i64
    value.rem_euclid(modulus as i128) as i64
}

/// Number of significant bits of a positive exponent.
#[inline]
fn bit_len(exponent: i64) -> u32 {
    i64::BITS - exponent.leading_zeros()
}

/// Greatest common divisor of two positive integers.
pub fn gcd(a: i64, b: i64) -> Result<i64> {
    check_positive("a", a)?;
    check_positive("b", b)?;

    let (mut smaller, mut larger) = if a <= b { (a, b) } else { (b, a) };
    while smaller != 0 {
        (smaller, larger) = (larger % smaller, smaller);
    }
    Ok(larger)
}

/// `a mod b`, always in `[0, b)` even for negative `a`.
pub fn modulo(a: i64, b: i64) -> Result<i64> {
    check_positive("modulus", b)?;
    Ok(reduce(a as i128, b))
}

/// `base^exponent mod modulus` by square-and-multiply, scanning the exponent
/// from its most significant bit down.
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64> {
    check_positive("base", base)?;
    check_positive("exponent", exponent)?;
    check_positive("modulus", modulus)?;

    let m = modulus as i128;
    let b = base as i128 % m;
    let mut result: i128 = 1;
    for i in (0..bit_len(exponent)).rev() {
        result = result * result % m;
        if (exponent >> i) & 1 == 1 {
            result = result * b % m;
        }
    }
    Ok((result % m) as i64)
}

/// Recursive form of [`mod_pow`]. Same preconditions, same results.
pub fn mod_pow_recursive(base: i64, exponent: i64, modulus: i64) -> Result<i64> {
    check_positive("base", base)?;
    check_positive("exponent", exponent)?;
    check_positive("modulus", modulus)?;

    fn go(base: i128, exponent: i64, m: i128) -> i128 {
        if exponent == 1 {
            base % m
        } else if exponent % 2 == 0 {
            let half = go(base, exponent / 2, m);
            half * half % m
        } else {
            base * go(base, exponent - 1, m) % m
        }
    }

    let m = modulus as i128;
    Ok(go(base as i128 % m, exponent, m) as i64)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a·x + b·y = g`. The
/// coefficients are the ones produced by classic recursive back-substitution,
/// accumulated here in a loop instead.
pub fn extended_euclid(a: i64, b: i64) -> Result<(i64, i64, i64)> {
    check_positive("a", a)?;
    check_positive("b", b)?;

    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    Ok((old_r, old_x, old_y))
}

/// Multiplicative inverse of `k` modulo `n`.
///
/// The Bézout coefficient of `k` is taken from `extended_euclid(n, k)`;
/// the argument order matters.
pub fn mod_inverse(k: i64, n: i64) -> Result<i64> {
    if gcd(n, k)? != 1 {
        return Err(Error::NotInvertible { value: k, modulus: n });
    }
    let (_, _, y) = extended_euclid(n, k)?;
    modulo(y, n)
}

/// `base^exponent` by repeated squaring. Fails with
/// [`Error::ArithmeticOverflow`] instead of wrapping.
pub fn pow(base: i64, exponent: i64) -> Result<i64> {
    check_positive("base", base)?;
    check_positive("exponent", exponent)?;

    let mut result: i64 = 1;
    for i in (0..bit_len(exponent)).rev() {
        result = result.checked_mul(result).ok_or(Error::ArithmeticOverflow)?;
        if (exponent >> i) & 1 == 1 {
            result = result.checked_mul(base).ok_or(Error::ArithmeticOverflow)?;
        }
    }
    Ok(result)
}

/// Recursive form of [`pow`].
pub fn pow_recursive(base: i64, exponent: i64) -> Result<i64> {
    check_positive("base", base)?;
    check_positive("exponent", exponent)?;

    fn go(base: i64, exponent: i64) -> Result<i64> {
        if exponent == 1 {
            return Ok(base);
        }
        if exponent % 2 == 0 {
            let half = go(base, exponent / 2)?;
            half.checked_mul(half).ok_or(Error::ArithmeticOverflow)
        } else {
            base.checked_mul(go(base, exponent - 1)?)
                .ok_or(Error::ArithmeticOverflow)
        }
    }

    go(base, exponent)
}
