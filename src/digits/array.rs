// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width digit containers.
//!
//! A [`DigitArray`] is a run of cells, each either [`Cell::Unset`] or
//! [`Cell::Set`] with a value in `[0, base)`. Position 0 is the least significant
//! digit. The array only becomes an integer through [`DigitArray::to_integer`],
//! which refuses while any cell is still unset.
//!
//! [`DigitSeq`] opens an array for writing. Two knobs replace what would otherwise
//! be a small class hierarchy:
//!
//! | Knob     | Number `n` | Carry column | Palindrome |
//! |----------|------------|--------------|------------|
//! | origin   | 0          | 1            | 1          |
//! | mode     | `Plain`    | `Plain`      | `Mirrored` |
//!
//! With `Mirrored`, every write lands on the position and on its mirror in the
//! same call, so a palindrome can never be observed half-written.

use std::fmt;

use crate::digits::radix::symbol;
use crate::error::{Error, Result};

/// One digit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Unset,
    Set(u32),
}

impl Cell {
    pub fn value(self) -> Option<u32> {
        match self {
            Cell::Unset => None,
            Cell::Set(v) => Some(v),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Cell::Set(_))
    }
}

/// Convert a signed intermediate into a digit of `base`.
///
/// Seed rules and carries are computed in signed arithmetic; this is where a
/// negative or oversized result turns into an error instead of wrapping.
pub fn checked_digit(value: i64, base: u32) -> Result<u32> {
    if value < 0 || value >= i64::from(base) {
        return Err(Error::DigitOutOfRange { value, base });
    }
    Ok(value as u32)
}

/// Read-only, fixed-length base-g digit array (position 0 least significant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitArray {
    base: u32,
    cells: Vec<Cell>,
}

impl DigitArray {
    /// An array of `len` undetermined digits.
    pub fn unset(base: u32, len: usize) -> Self {
        Self {
            base,
            cells: vec![Cell::Unset; len],
        }
    }

    /// A fully determined array from least-significant-first digits.
    pub fn from_digits(base: u32, digits: &[u32]) -> Result<Self> {
        let cells = digits
            .iter()
            .map(|&d| checked_digit(i64::from(d), base).map(Cell::Set))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { base, cells })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn check(&self, pos: usize) -> Result<()> {
        if pos >= self.cells.len() {
            return Err(Error::Index {
                pos,
                min: 0,
                max: self.cells.len().saturating_sub(1),
            });
        }
        Ok(())
    }

    /// Cell at 0-based `pos`.
    pub fn get(&self, pos: usize) -> Result<Cell> {
        self.check(pos)?;
        Ok(self.cells[pos])
    }

    /// Determined digit at 0-based `pos`.
    pub fn digit(&self, pos: usize) -> Result<u32> {
        self.get(pos)?.value().ok_or(Error::IncompleteValue {
            undetermined: self.undetermined(),
            len: self.len(),
        })
    }

    pub fn undetermined(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_set()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_set())
    }

    /// All digits, least significant first. Fails while any digit is unset.
    pub fn digits(&self) -> Result<Vec<u32>> {
        self.cells
            .iter()
            .map(|c| {
                c.value().ok_or(Error::IncompleteValue {
                    undetermined: self.undetermined(),
                    len: self.len(),
                })
            })
            .collect()
    }

    /// Collapse to the base-g value.
    pub fn to_integer(&self) -> Result<u128> {
        let undetermined = self.undetermined();
        if undetermined > 0 {
            return Err(Error::IncompleteValue {
                undetermined,
                len: self.len(),
            });
        }
        let mut value: u128 = 0;
        for cell in self.cells.iter().rev() {
            let d = cell.value().unwrap_or(0);
            value = value
                .checked_mul(u128::from(self.base))
                .and_then(|v| v.checked_add(u128::from(d)))
                .ok_or(Error::Overflow)?;
        }
        Ok(value)
    }

    pub(crate) fn put(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }
}

impl fmt::Display for DigitArray {
    /// Most significant digit first, `.` for undetermined cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().rev().enumerate() {
            match cell {
                Cell::Unset => write!(f, ".")?,
                Cell::Set(d) => match symbol(*d) {
                    Some(c) if self.base <= 36 => write!(f, "{}", c)?,
                    _ => {
                        if i > 0 {
                            write!(f, ":")?;
                        }
                        write!(f, "{}", d)?;
                    }
                },
            }
        }
        Ok(())
    }
}

/// How a [`DigitSeq`] propagates a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write the addressed cell only.
    Plain,
    /// Write the addressed cell and its mirror `len - 1 - index`.
    Mirrored,
}

/// A digit array opened for writing, addressed from a configurable origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSeq {
    array: DigitArray,
    origin: usize,
    mode: WriteMode,
}

/// A palindrome: origin 1, mirrored writes.
pub type Palindrome = DigitSeq;

/// A carry column: origin 1, plain writes.
pub type CarryColumn = DigitSeq;

impl DigitSeq {
    pub fn new(base: u32, len: usize, origin: usize, mode: WriteMode) -> Self {
        Self {
            array: DigitArray::unset(base, len),
            origin,
            mode,
        }
    }

    /// Empty palindrome of length `len`, written from position 1.
    pub fn palindrome(base: u32, len: usize) -> Self {
        Self::new(base, len, 1, WriteMode::Mirrored)
    }

    /// Empty carry column of length `len`, written from position 1.
    pub fn carry_column(base: u32, len: usize) -> Self {
        Self::new(base, len, 1, WriteMode::Plain)
    }

    /// Build a sequence and write `digits` from the first writable position on.
    pub fn with_digits(
        base: u32,
        len: usize,
        origin: usize,
        mode: WriteMode,
        digits: &[i64],
    ) -> Result<Self> {
        let mut seq = Self::new(base, len, origin, mode);
        for (offset, &d) in digits.iter().enumerate() {
            seq.set(origin + offset, checked_digit(d, base)?)?;
        }
        Ok(seq)
    }

    pub fn base(&self) -> u32 {
        self.array.base()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// The underlying 0-based array.
    pub fn array(&self) -> &DigitArray {
        &self.array
    }

    pub fn into_array(self) -> DigitArray {
        self.array
    }

    /// Number of positions that can be written independently.
    ///
    /// For a mirrored sequence this is the lower half including the centre.
    pub fn half(&self) -> usize {
        match self.mode {
            WriteMode::Plain => self.len(),
            WriteMode::Mirrored => self.len().div_ceil(2),
        }
    }

    fn index(&self, pos: usize) -> Result<usize> {
        if pos < self.origin || pos >= self.origin + self.len() {
            return Err(Error::Index {
                pos,
                min: self.origin,
                max: (self.origin + self.len()).saturating_sub(1),
            });
        }
        Ok(pos - self.origin)
    }

    /// 0-based storage index of the cell mirrored with `pos`.
    pub fn mirror_of(&self, pos: usize) -> Result<usize> {
        let idx = self.index(pos)?;
        Ok(self.len() - 1 - idx)
    }

    pub fn get(&self, pos: usize) -> Result<Cell> {
        let idx = self.index(pos)?;
        Ok(self.array.cells[idx])
    }

    pub fn is_set(&self, pos: usize) -> Result<bool> {
        Ok(self.get(pos)?.is_set())
    }

    /// Determined digit at `pos`.
    pub fn digit(&self, pos: usize) -> Result<u32> {
        let idx = self.index(pos)?;
        self.array.digit(idx)
    }

    /// Digit at `pos`, reading positions past the end as 0.
    ///
    /// Shorter palindromes are zero-padded on the left when summed with longer ones.
    pub fn digit_or_zero(&self, pos: usize) -> Result<u32> {
        if pos >= self.origin + self.len() {
            return Ok(0);
        }
        self.digit(pos)
    }

    /// Write `value` at `pos` (and its mirror in `Mirrored` mode).
    ///
    /// Rewriting a cell with the value it already holds is allowed; replacing a
    /// determined digit with a different one is a [`Error::MirrorConflict`].
    pub fn set(&mut self, pos: usize, value: u32) -> Result<()> {
        let idx = self.index(pos)?;
        checked_digit(i64::from(value), self.base())?;
        let mut targets = vec![idx];
        if self.mode == WriteMode::Mirrored {
            let mirror = self.len() - 1 - idx;
            if mirror != idx {
                targets.push(mirror);
            }
        }
        for &t in &targets {
            if let Cell::Set(existing) = self.array.cells[t] {
                if existing != value {
                    return Err(Error::MirrorConflict {
                        pos,
                        existing,
                        value,
                    });
                }
            }
        }
        for t in targets {
            self.array.put(t, Cell::Set(value));
        }
        Ok(())
    }

    /// Reset `pos` (and its mirror in `Mirrored` mode) to undetermined.
    pub fn clear(&mut self, pos: usize) -> Result<()> {
        let idx = self.index(pos)?;
        self.array.put(idx, Cell::Unset);
        if self.mode == WriteMode::Mirrored {
            let mirror = self.len() - 1 - idx;
            self.array.put(mirror, Cell::Unset);
        }
        Ok(())
    }

    pub fn to_integer(&self) -> Result<u128> {
        self.array.to_integer()
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.array.fmt(f)
    }
}
