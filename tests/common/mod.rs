//! Shared test utilities and fixtures.

#![allow(dead_code)]

use palsum::{decompose, Decomposition};

// Re-export canonical test utilities from palsum::testing
pub use palsum::testing::{check_decomposition, first_in_category, from_msd};

/// Bases every integration suite covers.
pub const BASES: [u32; 6] = [5, 7, 10, 16, 36, 100];

/// Decompose and panic with a readable message on any broken property.
pub fn assert_decomposes(n: u128, base: u32) -> Decomposition {
    let d = decompose(n, base).unwrap_or_else(|e| panic!("{} in base {}: {}", n, base, e));
    if let Err(msg) = check_decomposition(&d) {
        panic!("{} in base {}: {}", n, base, msg);
    }
    d
}

/// `g^k`.
pub fn pow(base: u32, k: u32) -> u128 {
    u128::from(base).pow(k)
}
