// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The number being decomposed.

use crate::digits::{radix, DigitArray};
use crate::error::Result;

/// `n` together with its base-g digits. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    value: u128,
    digits: DigitArray,
}

impl Number {
    pub fn new(value: u128, base: u32) -> Result<Self> {
        let digits = DigitArray::from_digits(base, &radix::to_digits(value, base)?)?;
        Ok(Self { value, digits })
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn base(&self) -> u32 {
        self.digits.base()
    }

    /// Number of base-g digits (`L`).
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at 0-based `pos` (0 is least significant).
    pub fn digit(&self, pos: usize) -> Result<u32> {
        self.digits.digit(pos)
    }

    /// Digit at `pos` widened for signed seed arithmetic.
    pub fn signed(&self, pos: usize) -> Result<i64> {
        self.digit(pos).map(i64::from)
    }

    pub fn digits(&self) -> &DigitArray {
        &self.digits
    }
}
