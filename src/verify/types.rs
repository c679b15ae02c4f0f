// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrappers that make unverified decompositions unrepresentable.
//!
//! | Type             | What's Guaranteed                               |
//! |------------------|-------------------------------------------------|
//! | `PalindromeTerm` | base-g expansion reads the same both ways       |
//! | `VerifiedTriple` | three palindromic terms whose sum is exactly `n`|
//!
//! # Example
//!
//! ```
//! use palsum::verify::VerifiedTriple;
//!
//! let triple = VerifiedTriple::new(2025, 10, [1991, 33, 1]).unwrap();
//! assert_eq!(triple.values(), [1991, 33, 1]);
//!
//! assert!(VerifiedTriple::new(2025, 10, [1990, 34, 1]).is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::digits::radix;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A term's base-g expansion is not a palindrome.
    NotPalindrome { value: u128, base: u32 },
    /// The terms do not add up to `n`.
    SumMismatch { expected: u128, actual: Option<u128> },
    /// The base cannot represent digits at all.
    InvalidBase { base: u32 },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::NotPalindrome { value, base } => {
                write!(f, "{} is not a palindrome in base {}", value, base)
            }
            InvariantError::SumMismatch {
                expected,
                actual: Some(actual),
            } => {
                write!(f, "terms sum to {} instead of {}", actual, expected)
            }
            InvariantError::SumMismatch {
                expected,
                actual: None,
            } => {
                write!(f, "terms overflow instead of summing to {}", expected)
            }
            InvariantError::InvalidBase { base } => {
                write!(f, "base {} is below 2", base)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A non-negative integer whose base-g expansion is a palindrome.
///
/// # Invariants (enforced at construction)
/// - `digits` is the base-g expansion of `value`, least significant first
/// - `digits` equals its own reverse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromeTerm {
    value: u128,
    digits: Vec<u32>,
}

impl PalindromeTerm {
    pub fn new(value: u128, base: u32) -> Result<Self, InvariantError> {
        let digits =
            radix::to_digits(value, base).map_err(|_| InvariantError::InvalidBase { base })?;
        if !digits.iter().eq(digits.iter().rev()) {
            return Err(InvariantError::NotPalindrome { value, base });
        }
        Ok(Self { value, digits })
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Three palindromes summing to `n`.
///
/// # Invariants (enforced at construction)
/// - every term is a [`PalindromeTerm`] in the same base
/// - `terms[0] + terms[1] + terms[2] == n`, without overflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedTriple {
    n: u128,
    base: u32,
    terms: [PalindromeTerm; 3],
}

impl VerifiedTriple {
    pub fn new(n: u128, base: u32, values: [u128; 3]) -> Result<Self, InvariantError> {
        let [a, b, c] = values;
        let terms = [
            PalindromeTerm::new(a, base)?,
            PalindromeTerm::new(b, base)?,
            PalindromeTerm::new(c, base)?,
        ];
        let actual = a.checked_add(b).and_then(|s| s.checked_add(c));
        if actual != Some(n) {
            return Err(InvariantError::SumMismatch {
                expected: n,
                actual,
            });
        }
        Ok(Self { n, base, terms })
    }

    pub fn n(&self) -> u128 {
        self.n
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn terms(&self) -> &[PalindromeTerm; 3] {
        &self.terms
    }

    pub fn values(&self) -> [u128; 3] {
        [
            self.terms[0].value,
            self.terms[1].value,
            self.terms[2].value,
        ]
    }

    pub fn into_terms(self) -> [PalindromeTerm; 3] {
        self.terms
    }
}
