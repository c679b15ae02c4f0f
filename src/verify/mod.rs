// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`PalindromeTerm`, `VerifiedTriple`) that can only be
//!    built from values that satisfy the invariant. If you hold one, it is a
//!    palindrome, or three of them add up to `n`.
//!
//! 2. **Runtime contracts** that panic in debug builds when the engine's internal
//!    state goes wrong: a palindrome whose halves disagree, or a column whose
//!    digits and carries do not balance. Zero-cost in release.
//!
//! Every decomposition leaving the crate passes through the wrappers, whichever
//! strategy produced it.

mod types;
pub mod contracts;

pub use types::*;
