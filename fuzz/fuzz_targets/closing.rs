// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the closing solver on hand-seeded palindromes.
//!
//! The fuzzer picks lengths and outer digits; the solver must either complete
//! the palindromes to an exact sum or report that it cannot.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use palsum::closing::close;
use palsum::{DigitSeq, Number, WriteMode};

#[derive(Debug, Arbitrary)]
struct Input {
    n: u64,
    base: u8,
    lens: [u8; 3],
    outer: [u8; 3],
}

fuzz_target!(|input: Input| {
    let base = u32::from(input.base % 12) + 5;
    let Ok(number) = Number::new(u128::from(input.n), base) else {
        return;
    };

    let mut terms = Vec::with_capacity(3);
    for (len, outer) in input.lens.iter().zip(input.outer) {
        let len = usize::from(*len) % (number.len() + 1);
        let digits = [i64::from(outer) % i64::from(base)];
        let Ok(p) = DigitSeq::with_digits(base, len.max(1), 1, WriteMode::Mirrored, &digits) else {
            return;
        };
        terms.push(p);
    }
    let Ok(terms) = <[DigitSeq; 3]>::try_from(terms) else {
        return;
    };

    if let Ok(closed) = close(&number, &terms, 2) {
        let sum: u128 = closed
            .terms
            .iter()
            .map(|p| p.to_integer().expect("closed terms are complete"))
            .sum();
        assert_eq!(sum, u128::from(input.n));
    }
});
