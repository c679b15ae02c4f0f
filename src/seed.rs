// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-category starting digits.
//!
//! Each category fixes the length of the three palindromes and their outermost
//! one or two digits. The table is written in signed arithmetic exactly as it is
//! stated; a rule that lands outside `[0, g-1]` (for example `n[L-2] - 1` with
//! `n[L-2] = 0`) surfaces as [`Error::DigitOutOfRange`], and a length below 1 as
//! [`Error::Index`]. A number shorter than three digits has no seed at all and is
//! rejected with [`Precondition::TooShort`].
//!
//! [`Error::DigitOutOfRange`]: crate::Error::DigitOutOfRange
//! [`Error::Index`]: crate::Error::Index
//! [`Precondition::TooShort`]: crate::Precondition::TooShort

use crate::classify::Category;
use crate::digits::{residue, DigitSeq, Palindrome, WriteMode};
use crate::error::{Precondition, Result};
use crate::MIN_DIGITS;
use crate::number::Number;

/// Length and leading digits of one palindrome, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRule {
    pub len: i64,
    pub digits: Vec<i64>,
}

/// The three rules of a category.
pub fn rules(n: &Number, category: Category) -> Result<[SeedRule; 3]> {
    let len = n.len();
    if len < MIN_DIGITS {
        return Err(Precondition::TooShort { digits: len }.into());
    }
    let l = len as i64;
    let g = i64::from(n.base());
    let d = |x: i64| i64::from(residue(x, n.base()));

    let first = n.signed(len - 1)?;
    let second = n.signed(len - 2)?;
    let third = n.signed(len - 3)?;
    let last = n.signed(0)?;

    let rule = |len: i64, digits: &[i64]| SeedRule {
        len,
        digits: digits.to_vec(),
    };

    Ok(match category {
        Category::A1 => [
            rule(l, &[first]),
            rule(l - 1, &[second - 1]),
            rule(l - 2, &[d(last - first - second + 1)]),
        ],
        Category::A2 => [
            rule(l, &[first]),
            rule(l - 1, &[second - 2]),
            rule(l - 2, &[1]),
        ],
        Category::A3 => [
            rule(l, &[first - 1]),
            rule(l - 1, &[g - 1]),
            rule(l - 2, &[d(last - first + 2)]),
        ],
        Category::A4 => [
            rule(l, &[first - 1]),
            rule(l - 1, &[g - 2]),
            rule(l - 2, &[1]),
        ],
        Category::A5 => [
            rule(l - 1, &[g - 1]),
            rule(l - 2, &[third + 1]),
            rule(l - 3, &[d(last - third)]),
        ],
        Category::A6 => [
            rule(l - 1, &[g - 1]),
            rule(l - 2, &[third + 2]),
            rule(l - 3, &[g - 1]),
        ],
        Category::B1 => [
            rule(l, &[1, second]),
            rule(l - 2, &[third - 1]),
            rule(l - 3, &[d(last - third)]),
        ],
        Category::B2 => [
            rule(l, &[1, second]),
            rule(l - 2, &[third - 2]),
            rule(l - 3, &[1]),
        ],
        Category::B3 => [
            rule(l, &[1, second - 1]),
            rule(l - 2, &[g - 2]),
            rule(l - 3, &[1]),
        ],
        Category::B4 => [
            rule(l, &[1, second]),
            rule(l - 2, &[1]),
            rule(l - 3, &[g - 2]),
        ],
        Category::B5 => [
            rule(l, &[1, second - 1]),
            rule(l - 2, &[g - 1]),
            rule(l - 3, &[last]),
        ],
        Category::B6 => [
            rule(l, &[1, second]),
            rule(l - 2, &[2]),
            rule(l - 3, &[d(last - 3)]),
        ],
        Category::B7 => [
            rule(l, &[1, second]),
            rule(l - 2, &[1]),
            rule(l - 3, &[1]),
        ],
    })
}

/// Build the seeded palindromes for `category`.
pub fn seed(n: &Number, category: Category) -> Result<[Palindrome; 3]> {
    let [r1, r2, r3] = rules(n, category)?;
    Ok([
        build(n.base(), &r1)?,
        build(n.base(), &r2)?,
        build(n.base(), &r3)?,
    ])
}

fn build(base: u32, rule: &SeedRule) -> Result<Palindrome> {
    let len = usize::try_from(rule.len).unwrap_or(0);
    DigitSeq::with_digits(base, len, 1, WriteMode::Mirrored, &rule.digits)
}

/// `carry[1]` from the seeded outer digits.
pub fn initial_carry(terms: &[Palindrome; 3]) -> Result<u32> {
    let g = terms[0].base();
    let mut sum = 0;
    for p in terms {
        sum += p.digit(1)?;
    }
    Ok(sum / g)
}
