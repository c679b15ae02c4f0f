// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thirteen-way classification of `n` from its leading and trailing digits.
//!
//! The classifier reads only four digits: the three most significant
//! (`n[L-1]`, `n[L-2]`, `n[L-3]`) and the least significant `n[0]`.
//!
//! ```text
//!   n[L-1] n[L-2] n[L-3] ...... n[0]
//!   ───────────────────         ────
//!     leading block            trailing
//! ```
//!
//! Two branches run in order. The A-branch always runs; the B-branch runs whenever
//! `n[L-1] == 1` and its assignment replaces whatever the A-branch chose. Inside the
//! B-branch the `B_1`/`B_2` test is followed by an unconditional `B_3..B_7` chain, so
//! the net category for a leading 1 is always one of `B_3..B_7`. The replaced A
//! category is kept as [`Classification::shadowed`].

use std::fmt;

use serde::Serialize;

use crate::digits::residue;
use crate::error::{Error, Precondition, Result};
use crate::number::Number;
use crate::MIN_DIGITS;

/// One of the thirteen construction families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "A_1")]
    A1,
    #[serde(rename = "A_2")]
    A2,
    #[serde(rename = "A_3")]
    A3,
    #[serde(rename = "A_4")]
    A4,
    #[serde(rename = "A_5")]
    A5,
    #[serde(rename = "A_6")]
    A6,
    #[serde(rename = "B_1")]
    B1,
    #[serde(rename = "B_2")]
    B2,
    #[serde(rename = "B_3")]
    B3,
    #[serde(rename = "B_4")]
    B4,
    #[serde(rename = "B_5")]
    B5,
    #[serde(rename = "B_6")]
    B6,
    #[serde(rename = "B_7")]
    B7,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::A1,
        Category::A2,
        Category::A3,
        Category::A4,
        Category::A5,
        Category::A6,
        Category::B1,
        Category::B2,
        Category::B3,
        Category::B4,
        Category::B5,
        Category::B6,
        Category::B7,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::A1 => "A_1",
            Category::A2 => "A_2",
            Category::A3 => "A_3",
            Category::A4 => "A_4",
            Category::A5 => "A_5",
            Category::A6 => "A_6",
            Category::B1 => "B_1",
            Category::B2 => "B_2",
            Category::B3 => "B_3",
            Category::B4 => "B_4",
            Category::B5 => "B_5",
            Category::B6 => "B_6",
            Category::B7 => "B_7",
        }
    }

    /// Whether this is one of the `B_*` families (leading digit 1).
    pub fn is_b(self) -> bool {
        matches!(
            self,
            Category::B1
                | Category::B2
                | Category::B3
                | Category::B4
                | Category::B5
                | Category::B6
                | Category::B7
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The last assignment made, the one the seed table is driven by.
    pub category: Category,
    /// The A-branch category replaced by the B-branch, if any.
    pub shadowed: Option<Category>,
}

/// Classify `n`. Requires at least three digits.
pub fn classify(n: &Number) -> Result<Classification> {
    let l = n.len();
    if l < MIN_DIGITS {
        return Err(Precondition::TooShort { digits: l }.into());
    }
    let g = n.base();
    let d = |x: i64| residue(x, g);

    let first = n.signed(l - 1)?;
    let second = n.signed(l - 2)?;
    let third = n.signed(l - 3)?;
    let last = n.signed(0)?;

    let mut category = None;

    if !(0..=2).contains(&second) {
        category = Some(if d(last - first - second + 1) != 0 {
            Category::A1
        } else {
            Category::A2
        });
    } else if first != 1 {
        category = Some(if d(last - first + 2) != 0 {
            Category::A3
        } else {
            Category::A4
        });
    } else if second == 0 {
        if third <= 3 && d(last - third) != 0 {
            category = Some(Category::A5);
        } else if third <= 2 && d(last - third) == 0 {
            category = Some(Category::A6);
        }
    }

    let a_branch = category;

    if first == 1 {
        let head = if second > 2 {
            None
        } else if third >= 4 && d(last - third) != 0 {
            Some(Category::B1)
        } else if third >= 3 && d(last - third) == 0 {
            Some(Category::B2)
        } else {
            None
        };

        let tail = if last == 0 {
            if third <= 1 {
                Category::B3
            } else {
                Category::B4
            }
        } else if third <= 2 {
            Category::B5
        } else if last == 3 {
            Category::B7
        } else {
            Category::B6
        };

        if let Some(head) = head {
            tracing::trace!(%head, %tail, "B_3..B_7 chain replaces head assignment");
        }
        category = Some(tail);
    }

    let category = category.ok_or(Error::Classification {
        leading: [first as u32, second as u32, third as u32],
        trailing: last as u32,
    })?;
    let shadowed = a_branch.filter(|&a| a != category);

    tracing::trace!(n = n.value(), base = g, %category, ?shadowed, "classified");

    Ok(Classification { category, shadowed })
}
