// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded greedy search for three palindromes.
//!
//! Used when the constructive path cannot start (a seed digit out of range, a
//! palindrome with no digits). Works for any `n` and any base `g ≥ 2`.
//!
//! The outer loop walks `p1` down through the palindromes `≤ n`, the inner loop
//! walks `p2` down through the palindromes `≤ n - p1` while `p2 ≥ n - p1 - p2`
//! (any solution can be reordered that way), and the first palindromic remainder
//! wins. Stepping to the next smaller palindrome is constant work in the number
//! of digits, so the budget counts candidates, not arithmetic.

use crate::digits::radix::{is_palindrome, to_digits};
use crate::error::{Error, Result};

/// Default number of candidates examined before giving up.
pub const DEFAULT_BUDGET: u64 = 1 << 20;

/// Evaluate most-significant-first digits.
fn eval_msd(digits: impl Iterator<Item = u32>, base: u32) -> Result<u128> {
    let g = u128::from(base);
    let mut value: u128 = 0;
    for d in digits {
        value = value
            .checked_mul(g)
            .and_then(|v| v.checked_add(u128::from(d)))
            .ok_or(Error::Overflow)?;
    }
    Ok(value)
}

/// Palindrome of `len` digits whose upper half (most significant first) is `half`.
fn mirror(half: &[u32], len: usize, base: u32) -> Result<u128> {
    let lower = half[..len / 2].iter().rev().copied();
    eval_msd(half.iter().copied().chain(lower), base)
}

/// Largest palindrome not exceeding `x`.
pub fn largest_palindrome_le(x: u128, base: u32) -> Result<u128> {
    let g = u128::from(base);
    let digits = to_digits(x, base)?;
    if x < g {
        return Ok(x);
    }
    let len = digits.len();
    let h = len.div_ceil(2);
    let half: Vec<u32> = digits[len - h..].iter().rev().copied().collect();

    match mirror(&half, len, base) {
        Ok(candidate) if candidate <= x => return Ok(candidate),
        Ok(_) | Err(Error::Overflow) => {}
        Err(e) => return Err(e),
    }

    // the mirrored upper half overshoots: lower the half by one
    let half_value = eval_msd(half.iter().copied(), base)? - 1;
    let floor = g.pow((h - 1) as u32);
    if half_value < floor {
        // 10..01 style: the answer is all (g-1) with one digit less
        return Ok(g.pow((len - 1) as u32) - 1);
    }
    let lowered: Vec<u32> = to_digits(half_value, base)?.into_iter().rev().collect();
    mirror(&lowered, len, base)
}

/// Search for `p1 + p2 + p3 == n`, examining at most `budget` candidates.
pub fn three_palindromes(n: u128, base: u32, budget: u64) -> Result<[u128; 3]> {
    let unresolved = Error::Unresolved { n, base };
    let mut checks: u64 = 0;
    let mut p1 = Some(largest_palindrome_le(n, base)?);

    while let Some(a) = p1 {
        let rest = n - a;
        let mut p2 = Some(largest_palindrome_le(rest, base)?);
        while let Some(b) = p2 {
            let c = rest - b;
            if b < c {
                break;
            }
            checks += 1;
            if checks > budget {
                tracing::debug!(n, base, checks, "search budget exhausted");
                return Err(unresolved);
            }
            if is_palindrome(c, base)? {
                tracing::debug!(n, base, checks, "search found decomposition");
                return Ok([a, b, c]);
            }
            p2 = match b {
                0 => None,
                _ => Some(largest_palindrome_le(b - 1, base)?),
            };
        }
        checks += 1;
        if checks > budget {
            return Err(unresolved);
        }
        p1 = match a {
            0 => None,
            _ => Some(largest_palindrome_le(a - 1, base)?),
        };
    }
    Err(unresolved)
}
