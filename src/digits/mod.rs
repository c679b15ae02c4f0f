// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Base-g digit storage and radix conversion.

pub mod array;
pub mod radix;

pub use array::{checked_digit, CarryColumn, Cell, DigitArray, DigitSeq, Palindrome, WriteMode};
pub use radix::{
    digit_len, from_digits, is_palindrome, parse_symbols, to_digits, to_symbols, ALPHABET,
    MAX_SYMBOL_BASE,
};

/// Non-negative residue of `x` modulo `g`.
#[inline]
pub fn residue(x: i64, g: u32) -> u32 {
    x.rem_euclid(i64::from(g)) as u32
}
