// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The decomposition pipeline.
//!
//! ```text
//!   (n, g) ──► Number ──► classify ──► seed + propagate ──► close ──► verify
//!                              │                                 │
//!                              │ shadowed category               │ no assignment
//!                              ▼                                 ▼
//!                         second attempt ─────────────────► search ──► verify
//! ```
//!
//! Each arrow can fail with an inspectable [`Error`]. With the default [`Options`]
//! a failed constructive attempt is logged and the next strategy runs; with
//! [`Options::strict`] the first error is returned.

use std::fmt;

use serde::Serialize;

use crate::classify::{classify, Category};
use crate::closing::{close_within, Closed};
use crate::error::{Error, Precondition, Result};
use crate::number::Number;
use crate::options::Options;
use crate::propagate::propagate;
use crate::search;
use crate::verify::{PalindromeTerm, VerifiedTriple};
use crate::MIN_BASE;

/// Which path produced a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Seeded from the net category.
    Constructive,
    /// Seeded from the A category the classifier overwrote.
    Shadowed,
    /// Bounded greedy search.
    Search,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Constructive => "constructive",
            Strategy::Shadowed => "shadowed",
            Strategy::Search => "search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `n = p1 + p2 + p3` with every term a base-g palindrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub n: u128,
    pub base: u32,
    /// `[p1, p2, p3]`.
    pub terms: [PalindromeTerm; 3],
    pub is_special: bool,
    pub strategy: Strategy,
    /// Category the palindromes were seeded from; `None` for search results.
    pub category: Option<Category>,
    /// Inner pairs per palindrome re-opened by the closing solver.
    pub repair_depth: usize,
}

impl Decomposition {
    pub fn values(&self) -> [u128; 3] {
        [
            self.terms[0].value(),
            self.terms[1].value(),
            self.terms[2].value(),
        ]
    }

    pub fn p1(&self) -> &PalindromeTerm {
        &self.terms[0]
    }

    pub fn p2(&self) -> &PalindromeTerm {
        &self.terms[1]
    }

    pub fn p3(&self) -> &PalindromeTerm {
        &self.terms[2]
    }
}

/// Even-length palindromes with a zero at either central position.
///
/// `digits` is least significant first; odd lengths are never special.
pub fn is_special(digits: &[u32]) -> bool {
    let len = digits.len();
    if len == 0 || len % 2 != 0 {
        return false;
    }
    let h = len / 2;
    digits[h] == 0 || digits[h - 1] == 0
}

/// Decompose `n` in base `base` with default [`Options`].
///
/// # Example
///
/// ```
/// use palsum::decompose;
///
/// let d = decompose(2025, 10).unwrap();
/// assert_eq!(d.values().iter().sum::<u128>(), 2025);
/// ```
pub fn decompose(n: u128, base: u32) -> Result<Decomposition> {
    decompose_with(n, base, &Options::default())
}

/// Decompose `n` in base `base`.
///
/// Requires `base ≥ 5` and at least three base-g digits.
pub fn decompose_with(n: u128, base: u32, options: &Options) -> Result<Decomposition> {
    if base < MIN_BASE {
        return Err(Precondition::BaseTooSmall { base }.into());
    }
    let number = Number::new(n, base)?;
    let class = classify(&number)?;

    let mut attempts = vec![(class.category, Strategy::Constructive)];
    if options.fallback {
        if let Some(shadowed) = class.shadowed {
            attempts.push((shadowed, Strategy::Shadowed));
        }
    }

    let mut last_error = None;
    for (category, strategy) in attempts {
        match construct(&number, category, options) {
            Ok(closed) => {
                let values = [
                    closed.terms[0].to_integer()?,
                    closed.terms[1].to_integer()?,
                    closed.terms[2].to_integer()?,
                ];
                return finish(
                    &number,
                    values,
                    strategy,
                    Some(category),
                    closed.repair_depth,
                );
            }
            Err(e) => {
                tracing::debug!(
                    n,
                    base,
                    %category,
                    %strategy,
                    error = %e,
                    "constructive attempt failed"
                );
                last_error = Some(e);
            }
        }
    }

    if !options.fallback {
        return Err(last_error.unwrap_or(Error::Unresolved { n, base }));
    }

    let values = search::three_palindromes(n, base, options.search_budget)?;
    finish(&number, values, Strategy::Search, None, 0)
}

fn construct(number: &Number, category: Category, options: &Options) -> Result<Closed> {
    let propagated = propagate(number, category)?;
    close_within(
        number,
        &propagated.terms,
        options.max_repair_depth,
        options.closing_budget,
    )
}

fn finish(
    number: &Number,
    values: [u128; 3],
    strategy: Strategy,
    category: Option<Category>,
    repair_depth: usize,
) -> Result<Decomposition> {
    let triple = VerifiedTriple::new(number.value(), number.base(), values)?;
    let terms = triple.into_terms();
    let is_special = is_special(terms[0].digits());
    tracing::debug!(
        n = number.value(),
        base = number.base(),
        %strategy,
        repair_depth,
        is_special,
        "decomposed"
    );
    Ok(Decomposition {
        n: number.value(),
        base: number.base(),
        terms,
        is_special,
        strategy,
        category,
        repair_depth,
    })
}
