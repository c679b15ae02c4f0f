// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the decomposition pipeline.
//!
//! Every failure is a distinct, inspectable variant. Nothing in the crate turns an
//! error into a default palindrome or a zero; if a digit is missing or a position is
//! out of range, the caller hears about it.

use std::fmt;

use crate::verify::InvariantError;

/// Violated entry condition of [`decompose`](crate::decompose).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The base is below 5; the seed table needs the gap between 0..3 and g-2/g-1.
    BaseTooSmall { base: u32 },
    /// `n` has fewer than 3 base-g digits; the classifier reads position L-3.
    TooShort { digits: usize },
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::BaseTooSmall { base } => {
                write!(f, "base {} is below the minimum of 5", base)
            }
            Precondition::TooShort { digits } => {
                write!(f, "number has {} digits, at least 3 are required", digits)
            }
        }
    }
}

/// Errors produced while building, classifying or decomposing a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read or write position lies outside the array's valid range.
    Index { pos: usize, min: usize, max: usize },
    /// `to_integer` was called while some digits are still undetermined.
    IncompleteValue { undetermined: usize, len: usize },
    /// A digit value does not fit the base.
    DigitOutOfRange { value: i64, base: u32 },
    /// A mirrored write would overwrite an already determined, different digit.
    MirrorConflict { pos: usize, existing: u32, value: u32 },
    /// `decompose` was called outside its domain.
    Precondition(Precondition),
    /// Neither branch of the classifier assigned a category.
    Classification { leading: [u32; 3], trailing: u32 },
    /// The radix collaborator cannot work in this base.
    UnsupportedBase { base: u32 },
    /// A character is not a digit of the base.
    InvalidSymbol { symbol: char, base: u32 },
    /// A symbol string with no characters.
    EmptyInput,
    /// A value does not fit in `u128`.
    Overflow,
    /// Every strategy failed to produce a decomposition.
    Unresolved { n: u128, base: u32 },
    /// A produced decomposition failed re-verification.
    Invariant(InvariantError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index { pos, min, max } => {
                write!(f, "position {} outside [{}, {}]", pos, min, max)
            }
            Error::IncompleteValue { undetermined, len } => {
                write!(
                    f,
                    "{} of {} digits are still undetermined",
                    undetermined, len
                )
            }
            Error::DigitOutOfRange { value, base } => {
                write!(f, "digit {} is outside [0, {}]", value, base.saturating_sub(1))
            }
            Error::MirrorConflict {
                pos,
                existing,
                value,
            } => {
                write!(
                    f,
                    "writing {} at position {} conflicts with mirrored digit {}",
                    value, pos, existing
                )
            }
            Error::Precondition(p) => write!(f, "precondition failed: {}", p),
            Error::Classification { leading, trailing } => {
                write!(
                    f,
                    "no category matches leading digits {:?} with trailing digit {}",
                    leading, trailing
                )
            }
            Error::UnsupportedBase { base } => {
                write!(f, "base {} is outside the supported range [2, 36]", base)
            }
            Error::InvalidSymbol { symbol, base } => {
                write!(f, "'{}' is not a digit in base {}", symbol, base)
            }
            Error::EmptyInput => write!(f, "no digits to parse"),
            Error::Overflow => write!(f, "value does not fit in 128 bits"),
            Error::Unresolved { n, base } => {
                write!(f, "no decomposition found for {} in base {}", n, base)
            }
            Error::Invariant(e) => write!(f, "invariant violated: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Invariant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Precondition> for Error {
    fn from(p: Precondition) -> Self {
        Error::Precondition(p)
    }
}

impl From<InvariantError> for Error {
    fn from(e: InvariantError) -> Self {
        Error::Invariant(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
