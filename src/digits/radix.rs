// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer ↔ base-g conversion.
//!
//! Digits are least significant first everywhere in the crate. Symbol strings are
//! most significant first, the way numbers are written.

use crate::error::{Error, Result};

/// Digit symbols for bases up to 36.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest base with a symbol for every digit.
pub const MAX_SYMBOL_BASE: u32 = 36;

/// Symbol for digit `d`, if the alphabet has one.
pub fn symbol(d: u32) -> Option<char> {
    ALPHABET.get(d as usize).map(|&b| b as char)
}

fn check_base(base: u32) -> Result<()> {
    if base < 2 {
        return Err(Error::UnsupportedBase { base });
    }
    Ok(())
}

/// Base-`base` digits of `n`, least significant first. `0` has one digit.
pub fn to_digits(n: u128, base: u32) -> Result<Vec<u32>> {
    check_base(base)?;
    let g = u128::from(base);
    let mut digits = Vec::new();
    let mut rest = n;
    loop {
        digits.push((rest % g) as u32);
        rest /= g;
        if rest == 0 {
            break;
        }
    }
    Ok(digits)
}

/// Number of base-`base` digits of `n`.
pub fn digit_len(n: u128, base: u32) -> Result<usize> {
    to_digits(n, base).map(|d| d.len())
}

/// Horner evaluation of least-significant-first digits.
pub fn from_digits(digits: &[u32], base: u32) -> Result<u128> {
    check_base(base)?;
    let g = u128::from(base);
    digits.iter().rev().try_fold(0u128, |acc, &d| {
        if d >= base {
            return Err(Error::DigitOutOfRange {
                value: i64::from(d),
                base,
            });
        }
        acc.checked_mul(g)
            .and_then(|v| v.checked_add(u128::from(d)))
            .ok_or(Error::Overflow)
    })
}

/// `n` written in base `base`, most significant symbol first.
pub fn to_symbols(n: u128, base: u32) -> Result<String> {
    if base > MAX_SYMBOL_BASE {
        return Err(Error::UnsupportedBase { base });
    }
    let digits = to_digits(n, base)?;
    Ok(digits
        .iter()
        .rev()
        .filter_map(|&d| symbol(d))
        .collect())
}

/// Parse a symbol string (case-insensitive) in base `base`.
pub fn parse_symbols(s: &str, base: u32) -> Result<u128> {
    if !(2..=MAX_SYMBOL_BASE).contains(&base) {
        return Err(Error::UnsupportedBase { base });
    }
    let digits = s
        .chars()
        .rev()
        .map(|c| match c.to_digit(MAX_SYMBOL_BASE) {
            Some(d) if d < base => Ok(d),
            _ => Err(Error::InvalidSymbol { symbol: c, base }),
        })
        .collect::<Result<Vec<_>>>()?;
    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }
    from_digits(&digits, base)
}

/// Whether the base-`base` expansion of `n` reads the same both ways.
pub fn is_palindrome(n: u128, base: u32) -> Result<bool> {
    let digits = to_digits(n, base)?;
    Ok(digits.iter().eq(digits.iter().rev()))
}
