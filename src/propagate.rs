// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Digit propagation: fill the palindromes from the outside in.
//!
//! Step `i` writes one digit into each palindrome and one carry:
//!
//! ```text
//!   x = p1[i + x_bias]   chosen from n[T-i-n_bias] and p3[i-1]
//!   y = p2[i]            D(n[T-i-n_bias] - p3[i-1] - 1)
//!   z = p3[i]            D(n[i-1] - p1[i] - p2[i] - carry[i-1])
//!   carry[i]             (p1[i] + p2[i] + p3[i] + carry[i-1] - n[i-1]) / g
//! ```
//!
//! with `T = L - 1`. Because every write is mirrored, step `i` settles column
//! `i - 1` from below and the matching high column from above at the same time.
//! The loop stops once a target position is past its palindrome's centre; what is
//! left in the middle belongs to the closing solver.

use crate::classify::Category;
use crate::digits::{checked_digit, residue, CarryColumn, DigitSeq, Palindrome};
use crate::error::Result;
use crate::number::Number;
use crate::seed;
use crate::verify::contracts;

/// Column offsets for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    /// How many columns lower the high digit of `n` is read.
    pub n_bias: usize,
    /// How many positions further in `p1` is written.
    pub x_bias: usize,
}

impl Offsets {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::A1 | Category::A2 | Category::A3 | Category::A4 => Offsets {
                n_bias: 0,
                x_bias: 0,
            },
            // palindromes one digit shorter: read n one column lower
            Category::A5 | Category::A6 => Offsets {
                n_bias: 1,
                x_bias: 0,
            },
            Category::B1
            | Category::B2
            | Category::B3
            | Category::B4
            | Category::B5
            | Category::B6
            | Category::B7 => Offsets {
                n_bias: 1,
                x_bias: 1,
            },
        }
    }
}

/// Seeded palindromes plus carries, advanced step by step.
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    n: &'a Number,
    category: Category,
    offsets: Offsets,
    terms: [Palindrome; 3],
    carry: CarryColumn,
    steps: usize,
}

/// What the engine leaves behind.
#[derive(Debug, Clone)]
pub struct Propagated {
    pub category: Category,
    pub terms: [Palindrome; 3],
    pub carry: CarryColumn,
    /// Number of steps run after the seed.
    pub steps: usize,
}

impl<'a> Engine<'a> {
    /// Seed the palindromes for `category` and derive `carry[1]`.
    pub fn new(n: &'a Number, category: Category) -> Result<Self> {
        let terms = seed::seed(n, category)?;
        let mut carry = DigitSeq::carry_column(n.base(), n.len());
        carry.set(1, seed::initial_carry(&terms)?)?;
        Ok(Self {
            n,
            category,
            offsets: Offsets::for_category(category),
            terms,
            carry,
            steps: 0,
        })
    }

    pub fn terms(&self) -> &[Palindrome; 3] {
        &self.terms
    }

    pub fn carry(&self) -> &CarryColumn {
        &self.carry
    }

    /// Last step index the loop may reach.
    fn last_step(&self) -> usize {
        (self.n.len() - 1) / 2
    }

    /// High digit index `T - i - n_bias`, if it is still inside `n`.
    fn high(&self, i: usize) -> Option<usize> {
        (self.n.len() - 1).checked_sub(i + self.offsets.n_bias)
    }

    fn fits(&self, i: usize) -> bool {
        let [p1, p2, p3] = &self.terms;
        i + self.offsets.x_bias <= p1.half() && i <= p2.half() && i <= p3.half()
    }

    /// Run one step. Returns `false` without writing anything once the loop is done.
    pub fn step(&mut self) -> Result<bool> {
        let i = self.steps + 2;
        if i > self.last_step() || !self.fits(i) {
            return Ok(false);
        }
        let Some(t) = self.high(i) else {
            return Ok(false);
        };

        let g = self.n.base();
        let d = |x: i64| residue(x, g);
        let nt = self.n.signed(t)?;
        let Offsets { x_bias, .. } = self.offsets;

        let z_prev = i64::from(self.terms[2].digit(i - 1)?);
        let x = if i == 2 {
            let above = self.n.signed(t + 1)? - i64::from(self.terms[1].digit(1)?);
            if z_prev <= nt - 1 {
                d(above)
            } else {
                d(above - 1)
            }
        } else if z_prev <= nt - 1 {
            1
        } else {
            0
        };
        self.terms[0].set(i + x_bias, x)?;

        let y = d(nt - z_prev - 1);
        self.terms[1].set(i, y)?;

        let low = self.n.signed(i - 1)?;
        let c_prev = i64::from(self.carry.digit(i - 1)?);
        let x_here = i64::from(self.terms[0].digit(i)?);
        let z = d(low - x_here - i64::from(y) - c_prev);
        self.terms[2].set(i, z)?;

        let column = x_here + i64::from(y) + i64::from(z) + c_prev - low;
        let carry = checked_digit(column.div_euclid(i64::from(g)), g)?;
        self.carry.set(i, carry)?;

        contracts::check_column(self.n, &self.terms, &self.carry, i);
        tracing::trace!(step = i, x, y, z, carry, "propagated");

        self.steps += 1;
        Ok(true)
    }

    /// Step until the loop stops.
    pub fn run(mut self) -> Result<Propagated> {
        while self.step()? {}
        for p in &self.terms {
            contracts::check_mirror_symmetric(p);
        }
        tracing::debug!(
            n = self.n.value(),
            category = %self.category,
            steps = self.steps,
            open = self.terms.iter().map(|p| p.array().undetermined()).sum::<usize>(),
            "propagation finished"
        );
        Ok(Propagated {
            category: self.category,
            terms: self.terms,
            carry: self.carry,
            steps: self.steps,
        })
    }
}

/// Seed and propagate in one call.
pub fn propagate(n: &Number, category: Category) -> Result<Propagated> {
    Engine::new(n, category)?.run()
}
