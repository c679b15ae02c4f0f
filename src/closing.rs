// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closing solver: settle the central digits the propagation loop leaves open.
//!
//! Every palindrome pair that is still unset becomes a variable. A variable
//! `(term, j)` appears in column `j` and, unless it is the centre, in column
//! `len - 1 - j`. The solver walks the columns from least significant up:
//!
//! ```text
//!   column c:  Σ known digits + Σ variables + carry_in  ==  n[c] + g · carry_out
//! ```
//!
//! Variables are chosen when their low column is reached. The last new variable
//! of a column is forced (`mod g`), the others are enumerated. Failed
//! `(column, carry, live variables)` states are memoized, so the search is exact:
//! it finds an assignment whenever one exists.
//!
//! When the loop's greedy choices leave no assignment, the solver re-opens the
//! innermost fixed pairs of each palindrome, one more per round, and tries again.
//! Every column state visited counts against a budget shared by all rounds; once
//! it runs out the solver stops with [`Error::Unresolved`].

use std::collections::HashSet;

use crate::digits::{Cell, Palindrome};
use crate::error::{Error, Result};
use crate::number::Number;
use crate::verify::contracts;

/// Column states [`close`] may visit before giving up.
pub const DEFAULT_STATE_BUDGET: u64 = 1 << 18;

/// A palindrome pair, addressed by its low 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub term: usize,
    pub low: usize,
}

/// Completed palindromes and how many pairs had to be re-opened.
#[derive(Debug, Clone)]
pub struct Closed {
    pub terms: [Palindrome; 3],
    pub repair_depth: usize,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Known(u32),
    Var(usize),
}

/// Pairs to solve for: every unset pair plus the `depth` innermost set pairs of
/// each palindrome. The outermost pair is never re-opened.
pub fn open_pairs(terms: &[Palindrome; 3], depth: usize) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for (term, p) in terms.iter().enumerate() {
        let cells = p.array().cells();
        let half = p.half();
        let mut set = Vec::new();
        for low in 0..half {
            if cells[low].is_set() {
                set.push(low);
            } else {
                pairs.push(Pair { term, low });
            }
        }
        pairs.extend(
            set.iter()
                .rev()
                .filter(|&&low| low > 0)
                .take(depth)
                .map(|&low| Pair { term, low }),
        );
    }
    pairs.sort();
    pairs
}

struct ColumnSolver {
    g: u32,
    target: Vec<u32>,
    columns: Vec<Vec<Slot>>,
    /// Variables whose low column is `c`, by column.
    introduced: Vec<Vec<usize>>,
    low: Vec<usize>,
    last: Vec<usize>,
    min: Vec<u32>,
    assigned: Vec<Option<u32>>,
    failed: HashSet<(usize, u32, Vec<(usize, u32)>)>,
    budget: u64,
    visited: u64,
}

enum Outcome {
    Solved(Vec<u32>),
    NoAssignment,
    Exhausted,
}

impl ColumnSolver {
    fn new(n: &Number, terms: &[Palindrome; 3], pairs: &[Pair], budget: u64) -> Result<Self> {
        let ncols = n.len() + 1;
        let mut target = n.digits().digits()?;
        target.resize(ncols, 0);

        let var_of = |term: usize, low: usize| {
            pairs
                .iter()
                .position(|p| p.term == term && p.low == low)
        };

        let mut columns = vec![Vec::new(); ncols];
        for (term, p) in terms.iter().enumerate() {
            let len = p.len();
            for (j, cell) in p.array().cells().iter().enumerate() {
                let low = j.min(len - 1 - j);
                let slot = match (var_of(term, low), cell) {
                    (Some(v), _) => Slot::Var(v),
                    (None, Cell::Set(d)) => Slot::Known(*d),
                    (None, Cell::Unset) => {
                        return Err(Error::IncompleteValue {
                            undetermined: p.array().undetermined(),
                            len,
                        })
                    }
                };
                columns
                    .get_mut(j)
                    .ok_or(Error::Index {
                        pos: j,
                        min: 0,
                        max: ncols - 1,
                    })?
                    .push(slot);
            }
        }

        let mut introduced = vec![Vec::new(); ncols];
        let mut last = vec![0; pairs.len()];
        for (v, pair) in pairs.iter().enumerate() {
            introduced[pair.low].push(v);
            last[v] = terms[pair.term].len() - 1 - pair.low;
        }

        Ok(Self {
            g: n.base(),
            target,
            columns,
            introduced,
            low: pairs.iter().map(|p| p.low).collect(),
            last,
            // outer digit of a palindrome is its leading digit
            min: pairs.iter().map(|p| u32::from(p.low == 0)).collect(),
            assigned: vec![None; pairs.len()],
            failed: HashSet::new(),
            budget,
            visited: 0,
        })
    }

    fn live(&self, col: usize) -> Vec<(usize, u32)> {
        self.assigned
            .iter()
            .enumerate()
            .filter_map(|(v, &a)| {
                a.filter(|_| self.low[v] < col && self.last[v] >= col)
                    .map(|d| (v, d))
            })
            .collect()
    }

    fn exhausted(&self) -> bool {
        self.visited > self.budget
    }

    fn solve_column(&mut self, col: usize, carry: u32) -> bool {
        if col == self.columns.len() {
            return carry == 0;
        }
        self.visited += 1;
        if self.exhausted() {
            return false;
        }
        let key = (col, carry, self.live(col));
        if self.failed.contains(&key) {
            return false;
        }
        let mut sum = carry;
        for slot in &self.columns[col] {
            match *slot {
                Slot::Known(d) => sum += d,
                Slot::Var(v) => sum += self.assigned[v].unwrap_or(0),
            }
        }
        let ok = self.place(col, 0, sum);
        if !ok && !self.exhausted() {
            self.failed.insert(key);
        }
        ok
    }

    /// Assign the `idx`-th variable introduced at `col`, then move up a column.
    fn place(&mut self, col: usize, idx: usize, sum: u32) -> bool {
        if self.exhausted() {
            return false;
        }
        let g = self.g;
        let want = self.target[col];
        let fresh = self.introduced[col].len();
        if idx == fresh {
            if sum < want || (sum - want) % g != 0 {
                return false;
            }
            let carry = (sum - want) / g;
            contracts::check_carry_bound(carry);
            return self.solve_column(col + 1, carry);
        }
        let v = self.introduced[col][idx];
        let candidates: Vec<u32> = if idx + 1 == fresh {
            let forced = (want + g - sum % g) % g;
            if forced >= self.min[v] {
                vec![forced]
            } else {
                Vec::new()
            }
        } else {
            (self.min[v]..g).collect()
        };
        for d in candidates {
            self.assigned[v] = Some(d);
            if self.place(col, idx + 1, sum + d) {
                return true;
            }
            self.assigned[v] = None;
        }
        false
    }

    fn solve(mut self) -> (Outcome, u64) {
        let found = self.solve_column(0, 0);
        let (visited, exhausted) = (self.visited, self.exhausted());
        let outcome = if found {
            match self.assigned.into_iter().collect() {
                Some(values) => Outcome::Solved(values),
                None => Outcome::NoAssignment,
            }
        } else if exhausted {
            Outcome::Exhausted
        } else {
            Outcome::NoAssignment
        };
        (outcome, visited)
    }
}

/// Solve for `pairs` exactly; `None` if no assignment closes the sum.
pub fn solve_pairs(
    n: &Number,
    terms: &[Palindrome; 3],
    pairs: &[Pair],
) -> Result<Option<[Palindrome; 3]>> {
    solve_pairs_within(n, terms, pairs, DEFAULT_STATE_BUDGET).map(|(solved, _)| solved)
}

/// [`solve_pairs`] visiting at most `budget` column states.
///
/// Returns the solution and the number of states visited; running out of budget
/// is [`Error::Unresolved`].
pub fn solve_pairs_within(
    n: &Number,
    terms: &[Palindrome; 3],
    pairs: &[Pair],
    budget: u64,
) -> Result<(Option<[Palindrome; 3]>, u64)> {
    let (outcome, visited) = ColumnSolver::new(n, terms, pairs, budget)?.solve();
    let values = match outcome {
        Outcome::Solved(values) => values,
        Outcome::NoAssignment => return Ok((None, visited)),
        Outcome::Exhausted => {
            tracing::debug!(n = n.value(), budget, "closing budget exhausted");
            return Err(Error::Unresolved {
                n: n.value(),
                base: n.base(),
            });
        }
    };
    let mut out = terms.clone();
    for pair in pairs {
        out[pair.term].clear(pair.low + 1)?;
    }
    for (pair, d) in pairs.iter().zip(values) {
        out[pair.term].set(pair.low + 1, d)?;
    }
    Ok((Some(out), visited))
}

/// Complete the propagated palindromes, re-opening up to `max_repair_depth`
/// inner pairs per palindrome.
pub fn close(n: &Number, terms: &[Palindrome; 3], max_repair_depth: usize) -> Result<Closed> {
    close_within(n, terms, max_repair_depth, DEFAULT_STATE_BUDGET)
}

/// [`close`] with an explicit state budget shared by every repair round.
pub fn close_within(
    n: &Number,
    terms: &[Palindrome; 3],
    max_repair_depth: usize,
    budget: u64,
) -> Result<Closed> {
    let mut left = budget;
    for depth in 0..=max_repair_depth {
        let pairs = open_pairs(terms, depth);
        let (solved, visited) = solve_pairs_within(n, terms, &pairs, left)?;
        left = left.saturating_sub(visited);
        if let Some(done) = solved {
            for p in &done {
                contracts::check_mirror_symmetric(p);
            }
            tracing::debug!(
                n = n.value(),
                depth,
                variables = pairs.len(),
                "closed central digits"
            );
            return Ok(Closed {
                terms: done,
                repair_depth: depth,
            });
        }
        tracing::trace!(n = n.value(), depth, "no assignment, re-opening");
    }
    Err(Error::Unresolved {
        n: n.value(),
        base: n.base(),
    })
}
