// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full decomposition pipeline.
//!
//! Any `(n, g)` must either decompose into three palindromes that sum to `n`,
//! or fail with an error. Never a panic, never a wrong answer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use palsum::digits::is_palindrome;
use palsum::{decompose_with, Options};

#[derive(Debug, Arbitrary)]
struct Input {
    n: u128,
    base: u16,
    strict: bool,
}

fuzz_target!(|input: Input| {
    let base = u32::from(input.base % 1024);
    let options = if input.strict {
        Options::strict()
    } else {
        Options::default()
    };

    if let Ok(d) = decompose_with(input.n, base, &options) {
        let sum = d
            .values()
            .iter()
            .try_fold(0u128, |acc, &v| acc.checked_add(v));
        assert_eq!(sum, Some(input.n), "terms must sum to n");
        for v in d.values() {
            assert!(
                is_palindrome(v, base).unwrap_or(false),
                "{} is not a palindrome in base {}",
                v,
                base
            );
        }
    }
});
