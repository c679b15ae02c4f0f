// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for palsum digit primitives.
//!
//! This standalone crate extracts the radix conversion, the signed residue and
//! the mirrored palindrome write, and proves them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Round trip**: from_digits(to_digits(x)) == x for all u64 x
//! 2. **Digit bounds**: every digit is below the base
//! 3. **Residue**: residue(x, g) is in [0, g) and congruent to x
//! 4. **Mirroring**: a mirrored write always leaves a symmetric array
//! 5. **Carry bound**: three digits plus a carry of at most 2 carry at most 2

/// Most digits a u64 has in the smallest base proved here.
pub const MAX_DIGITS: usize = 28;

// ============================================================================
// RADIX (mirrors src/digits/radix.rs, narrowed to u64)
// ============================================================================

/// Digits of `n`, least significant first, into `out`. Returns the count.
pub fn to_digits(mut n: u64, base: u64, out: &mut [u32; MAX_DIGITS]) -> usize {
    let mut len = 0;
    loop {
        out[len] = (n % base) as u32;
        len += 1;
        n /= base;
        if n == 0 || len == MAX_DIGITS {
            return len;
        }
    }
}

/// Horner evaluation of least-significant-first digits; `None` on overflow.
pub fn from_digits(digits: &[u32], base: u64) -> Option<u64> {
    digits.iter().rev().try_fold(0u64, |acc, &d| {
        acc.checked_mul(base)?.checked_add(u64::from(d))
    })
}

/// Non-negative residue of `x` modulo `g`.
pub fn residue(x: i64, g: u32) -> u32 {
    x.rem_euclid(i64::from(g)) as u32
}

// ============================================================================
// MIRRORED WRITES (mirrors DigitSeq::set in src/digits/array.rs)
// ============================================================================

/// Write `value` at 1-based `pos` and at its mirror. `None` marks unset cells.
///
/// Fails on an out-of-range position or a conflicting existing digit.
pub fn set_mirrored(cells: &mut [Option<u32>], pos: usize, value: u32) -> Result<(), ()> {
    if pos == 0 || pos > cells.len() {
        return Err(());
    }
    let idx = pos - 1;
    let mirror = cells.len() - 1 - idx;
    for t in [idx, mirror] {
        if let Some(existing) = cells[t] {
            if existing != value {
                return Err(());
            }
        }
    }
    cells[idx] = Some(value);
    cells[mirror] = Some(value);
    Ok(())
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the radix round trip for every u64 in bases 5..=16.
    #[kani::proof]
    #[kani::unwind(29)] // MAX_DIGITS + 1
    fn verify_radix_round_trip() {
        let n: u64 = kani::any();
        let base: u64 = kani::any_where(|&b| (5..=16).contains(&b));
        let mut out = [0u32; MAX_DIGITS];
        let len = to_digits(n, base, &mut out);

        kani::assert(len >= 1, "every number has at least one digit");
        for i in 0..len {
            kani::assert(u64::from(out[i]) < base, "digit must be below the base");
        }
        kani::assert(
            from_digits(&out[..len], base) == Some(n),
            "round trip must preserve the value",
        );
    }

    /// Verify residue is in range and congruent.
    #[kani::proof]
    fn verify_residue() {
        let x: i64 = kani::any_where(|&x: &i64| x > i64::MIN / 2 && x < i64::MAX / 2);
        let g: u32 = kani::any_where(|&g| (2..=1 << 16).contains(&g));
        let r = residue(x, g);
        kani::assert(r < g, "residue must be below g");
        kani::assert(
            (x - i64::from(r)) % i64::from(g) == 0,
            "residue must be congruent to x",
        );
    }

    /// Verify a sequence of mirrored writes always leaves a symmetric array.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_mirrored_writes_stay_symmetric() {
        let len: usize = kani::any_where(|&n| (1..=8).contains(&n));
        let mut storage = [None; 8];
        let cells = &mut storage[..len];

        for _ in 0..3 {
            let pos: usize = kani::any();
            let value: u32 = kani::any_where(|&v| v < 10);
            let _ = set_mirrored(cells, pos, value);
        }

        for i in 0..len {
            kani::assert(cells[i] == cells[len - 1 - i], "cells must mirror");
        }
    }

    /// Verify a conflicting write changes nothing.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_conflict_is_atomic() {
        let len: usize = kani::any_where(|&n| (2..=8).contains(&n));
        let mut storage = [None; 8];
        let cells = &mut storage[..len];
        let pos: usize = kani::any_where(|&p| p >= 1 && p <= len);
        let first: u32 = kani::any_where(|&v| v < 10);
        let second: u32 = kani::any_where(|&v| v < 10 && v != first);

        kani::assert(set_mirrored(cells, pos, first).is_ok(), "first write succeeds");
        let before: [Option<u32>; 8] = {
            let mut copy = [None; 8];
            copy[..len].copy_from_slice(cells);
            copy
        };
        let mirror_pos = len + 1 - pos;
        kani::assert(
            set_mirrored(cells, mirror_pos, second).is_err(),
            "overwriting the mirror with a different digit must fail",
        );
        kani::assert(cells == &before[..len], "a failed write must not change cells");
    }

    /// Verify the column carry stays at most 2 for three digits.
    #[kani::proof]
    fn verify_carry_bound() {
        let g: u32 = kani::any_where(|&g| (5..=1 << 16).contains(&g));
        let a: u32 = kani::any_where(|&d| d < g);
        let b: u32 = kani::any_where(|&d| d < g);
        let c: u32 = kani::any_where(|&d| d < g);
        let carry_in: u32 = kani::any_where(|&k| k <= 2);
        let carry_out = (u64::from(a) + u64::from(b) + u64::from(c) + u64::from(carry_in))
            / u64::from(g);
        kani::assert(carry_out <= 2, "carry must stay at most 2");
    }
}
