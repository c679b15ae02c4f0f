// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::classify::{classify, Category};
use crate::decompose::{is_special, Decomposition};
use crate::digits::radix::is_palindrome;
use crate::number::Number;

/// Build `n` from digits written most significant first.
pub fn from_msd(digits: &[u32], base: u32) -> u128 {
    digits
        .iter()
        .fold(0u128, |acc, &d| acc * u128::from(base) + u128::from(d))
}

/// Every property a returned decomposition must have, as a readable message.
pub fn check_decomposition(d: &Decomposition) -> Result<(), String> {
    let values = d.values();
    let sum = values.iter().try_fold(0u128, |acc, &v| acc.checked_add(v));
    if sum != Some(d.n) {
        return Err(format!("{:?} does not sum to {}", values, d.n));
    }
    for v in values {
        if !is_palindrome(v, d.base).map_err(|e| e.to_string())? {
            return Err(format!("{} is not a palindrome in base {}", v, d.base));
        }
    }
    if d.is_special != is_special(d.p1().digits()) {
        return Err(format!("is_special disagrees with p1 = {}", values[0]));
    }
    Ok(())
}

/// Smallest `len`-digit number in `category`, if there is one.
pub fn first_in_category(category: Category, base: u32, len: usize) -> Option<u128> {
    let g = u128::from(base);
    let lo = g.checked_pow(len as u32 - 1)?;
    let hi = g.checked_pow(len as u32)?;
    (lo..hi).find(|&n| {
        Number::new(n, base)
            .ok()
            .and_then(|number| classify(&number).ok())
            .is_some_and(|c| c.category == category)
    })
}
