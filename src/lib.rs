// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Every natural number is a sum of three palindromes, constructively.
//!
//! Given `n` and a base `g ≥ 5`, this crate produces palindromes `p1, p2, p3` in
//! base `g` with `p1 + p2 + p3 == n`. The construction follows the
//! Cilleruelo–Luca–Baxter proof: classify `n` into one of thirteen families from a
//! few of its digits, seed the outer digits of the three palindromes, then walk
//! inwards, fixing one digit of each palindrome and one carry per step.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  number.rs  │────▶│ classify.rs  │────▶│   seed.rs   │────▶│propagate.rs │
//! │ (digits of  │     │ (13 families,│     │ (outer      │     │ (inward     │
//! │  n, base g) │     │  shadowed A) │     │  digits)    │     │  steps)     │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                                     │
//!        ┌────────────────────────────────────────────────────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │ closing.rs  │────▶│  verify/     │   search.rs: bounded fallback,
//! │ (central    │     │ (palindrome  │   also ends in verify/
//! │  columns)   │     │  + sum)      │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! `digits/` underlies all of it: a fixed-width array of explicit set/unset cells,
//! and a writable view with a configurable origin and mirrored writes.
//!
//! | Module      | Role                                                 |
//! |-------------|------------------------------------------------------|
//! | `digits`    | Digit cells, mirrored sequences, radix conversion    |
//! | `classify`  | Category of `n`, plus the A category it shadows      |
//! | `seed`      | Per-category lengths and outer digits                |
//! | `propagate` | Step loop with x/y/z digits and carries              |
//! | `closing`   | Exact column solver for the digits left open         |
//! | `search`    | Greedy fallback over descending palindromes          |
//! | `verify`    | Validated wrappers and debug contracts               |
//! | `decompose` | The pipeline and its [`Decomposition`] result        |
//! | `sweep`     | Decompose and re-verify a whole range                |
//!
//! # Usage
//!
//! ```
//! use palsum::{decompose, Strategy};
//!
//! let d = decompose(31_415_926, 10).unwrap();
//! let [p1, p2, p3] = d.values();
//! assert_eq!(p1 + p2 + p3, 31_415_926);
//! assert!(matches!(d.strategy, Strategy::Constructive | Strategy::Shadowed | Strategy::Search));
//! ```

// Module declarations
pub mod classify;
pub mod closing;
pub mod decompose;
pub mod digits;
pub mod error;
pub mod number;
pub mod options;
pub mod propagate;
pub mod search;
pub mod seed;
pub mod sweep;
pub mod verify;

#[doc(hidden)]
pub mod testing;

/// Smallest base the construction supports.
pub const MIN_BASE: u32 = 5;

/// Fewest digits of `n` the classifier can read.
pub const MIN_DIGITS: usize = 3;

// Re-exports for public API
pub use classify::{classify, Category, Classification};
pub use decompose::{decompose, decompose_with, is_special, Decomposition, Strategy};
pub use digits::{
    from_digits, parse_symbols, to_digits, to_symbols, Cell, DigitArray, DigitSeq, WriteMode,
};
pub use error::{Error, Precondition, Result};
pub use number::Number;
pub use options::Options;
pub use sweep::{sweep, SweepReport};
pub use verify::{InvariantError, PalindromeTerm, VerifiedTriple};

#[cfg(test)]
mod tests {
    //! Property tests over the whole pipeline.

    use super::*;
    use crate::digits::radix::is_palindrome;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_sum_and_palindromes(n in 100u128..10_000_000, base in 5u32..=36) {
            prop_assume!(n >= u128::from(base * base));
            let d = decompose(n, base).unwrap();
            prop_assert_eq!(d.values().iter().sum::<u128>(), n);
            for v in d.values() {
                prop_assert!(is_palindrome(v, base).unwrap());
            }
        }

        #[test]
        fn prop_radix_round_trip(n in any::<u128>(), base in 2u32..=64) {
            let digits = to_digits(n, base).unwrap();
            prop_assert_eq!(from_digits(&digits, base).unwrap(), n);
        }

        #[test]
        fn prop_classification_total(n in 1000u128..u128::from(u64::MAX), base in 5u32..=36) {
            let number = Number::new(n, base).unwrap();
            prop_assume!(number.len() >= MIN_DIGITS);
            prop_assert!(classify(&number).is_ok());
        }
    }
}
