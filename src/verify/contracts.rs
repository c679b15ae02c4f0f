// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the propagation and closing stages.
//!
//! Debug-mode assertions over intermediate state. They never run in release
//! builds; the type wrappers in [`super::types`] are what guard the output.
//!
//! | Contract Function         | Property                                          |
//! |---------------------------|---------------------------------------------------|
//! | `check_mirror_symmetric`  | cell `i` equals cell `len - 1 - i`, set or unset  |
//! | `check_column`            | digits + carry-in == n digit + g * carry-out      |
//! | `check_carry_bound`       | every carry is at most 2                          |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// A column adds at most three digits and a carry. With a carry of at most 2 the
/// column total stays below `3g`, so the next carry is again at most 2, and 2 is
/// a valid digit in every supported base. That is what lets carries live in a
/// base-g `DigitSeq`.
const _: () = {
    const G: u32 = crate::MIN_BASE;
    const MAX_CARRY: u32 = 2;
    const MAX_COLUMN: u32 = 3 * (G - 1) + MAX_CARRY;
    assert!(MAX_COLUMN / G <= MAX_CARRY);
    assert!(MAX_CARRY < G);
};

use crate::digits::{DigitSeq, Palindrome};
use crate::number::Number;

// ============================================================================
// PALINDROME CONTRACTS
// ============================================================================

/// Check that a mirrored sequence agrees with its own reverse.
///
/// # Panics (debug builds only)
/// Panics if some cell differs from its mirror.
#[inline]
pub fn check_mirror_symmetric(seq: &DigitSeq) {
    if cfg!(debug_assertions) {
        let cells = seq.array().cells();
        for (i, (a, b)) in cells.iter().zip(cells.iter().rev()).enumerate() {
            debug_assert_eq!(
                a,
                b,
                "Contract violation: mirror symmetry - cell {} of {} ({})",
                i,
                cells.len(),
                seq
            );
        }
    }
}

// ============================================================================
// COLUMN CONTRACTS
// ============================================================================

/// Check that column `i - 1` balances once step `i` has written it.
///
/// Palindromes shorter than `i` contribute 0; cells still unset are skipped.
#[inline]
pub fn check_column(n: &Number, terms: &[Palindrome; 3], carry: &DigitSeq, i: usize) {
    if cfg!(debug_assertions) {
        let digits: Option<u32> = terms
            .iter()
            .map(|p| p.digit_or_zero(i).ok())
            .sum();
        let (Some(digits), Ok(c_in), Ok(c_out), Ok(target)) = (
            digits,
            carry.digit(i - 1),
            carry.digit(i),
            n.digit(i - 1),
        ) else {
            return;
        };
        debug_assert_eq!(
            digits + c_in,
            target + n.base() * c_out,
            "Contract violation: column {} does not balance",
            i - 1
        );
        check_carry_bound(c_out);
    }
}

/// Check a single carry value.
#[inline]
pub fn check_carry_bound(carry: u32) {
    debug_assert!(carry <= 2, "Contract violation: carry {} > 2", carry);
}
