// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decompose and re-verify every number in a range.
//!
//! [`sweep`] walks the range in order. With the `parallel` feature, [`par_sweep`]
//! splits it into fixed-size chunks, sweeps them on the rayon pool and merges the
//! partial reports in range order, so both produce the same report.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::decompose::{decompose_with, Strategy};
use crate::error::Error;
use crate::options::Options;
use crate::verify::VerifiedTriple;

/// Failures kept verbatim in a report; the rest are only counted.
pub const MAX_REPORTED_FAILURES: usize = 20;

/// Numbers per work unit in [`par_sweep`].
#[cfg(feature = "parallel")]
pub const CHUNK: u128 = 4096;

/// One number that could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub n: u128,
    pub error: String,
}

/// Counts over a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub base: u32,
    pub from: u128,
    pub to: u128,
    pub decomposed: u64,
    /// Constructive or shadowed results the closing solver had to repair, i.e.
    /// with `repair_depth > 0`. They also count under their strategy.
    pub repaired: u64,
    /// Numbers below the minimum digit count.
    pub skipped: u64,
    pub special: u64,
    pub by_strategy: BTreeMap<Strategy, u64>,
    /// Keyed by category name; search results are counted under `"-"`.
    pub by_category: BTreeMap<String, u64>,
    pub failed: u64,
    pub failures: Vec<Failure>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    fn fail(&mut self, n: u128, error: String) {
        self.failed += 1;
        if self.failures.len() < MAX_REPORTED_FAILURES {
            self.failures.push(Failure { n, error });
        }
    }

    /// Fold in the report of the range directly after this one.
    pub fn merge(mut self, next: SweepReport) -> SweepReport {
        if self.from == self.to {
            self.from = next.from;
        }
        self.to = self.to.max(next.to);
        self.decomposed += next.decomposed;
        self.repaired += next.repaired;
        self.skipped += next.skipped;
        self.special += next.special;
        for (strategy, count) in next.by_strategy {
            *self.by_strategy.entry(strategy).or_default() += count;
        }
        for (category, count) in next.by_category {
            *self.by_category.entry(category).or_default() += count;
        }
        self.failed += next.failed;
        let room = MAX_REPORTED_FAILURES.saturating_sub(self.failures.len());
        self.failures.extend(next.failures.into_iter().take(room));
        self
    }
}

/// Decompose every `n` in `range`, calling `tick` after each one.
pub fn sweep(
    base: u32,
    range: Range<u128>,
    options: &Options,
    mut tick: impl FnMut(u128),
) -> SweepReport {
    let mut report = SweepReport {
        base,
        from: range.start,
        to: range.end,
        ..SweepReport::default()
    };

    for n in range {
        match decompose_with(n, base, options) {
            Ok(d) => match VerifiedTriple::new(n, base, d.values()) {
                Ok(_) => {
                    report.decomposed += 1;
                    report.repaired += u64::from(d.repair_depth > 0);
                    report.special += u64::from(d.is_special);
                    *report.by_strategy.entry(d.strategy).or_default() += 1;
                    let key = d
                        .category
                        .map_or_else(|| "-".to_string(), |c| c.name().to_string());
                    *report.by_category.entry(key).or_default() += 1;
                }
                Err(e) => report.fail(n, e.to_string()),
            },
            Err(Error::Precondition(_)) => report.skipped += 1,
            Err(e) => {
                tracing::warn!(n, base, error = %e, "decomposition failed");
                report.fail(n, e.to_string());
            }
        }
        tick(n);
    }

    report
}

/// [`sweep`] on the rayon pool. `tick` receives the size of each finished chunk.
#[cfg(feature = "parallel")]
pub fn par_sweep(
    base: u32,
    range: Range<u128>,
    options: &Options,
    tick: impl Fn(u64) + Sync,
) -> SweepReport {
    use rayon::prelude::*;

    let mut chunks = Vec::new();
    let mut start = range.start;
    while start < range.end {
        let end = range.end.min(start.saturating_add(CHUNK));
        chunks.push(start..end);
        start = end;
    }

    let empty = SweepReport {
        base,
        from: range.start,
        to: range.start,
        ..SweepReport::default()
    };
    let report = chunks
        .into_par_iter()
        .map(|chunk| {
            let len = (chunk.end - chunk.start) as u64;
            let part = sweep(base, chunk, options, |_| {});
            tick(len);
            part
        })
        .reduce(|| empty.clone(), SweepReport::merge);

    SweepReport {
        from: range.start,
        to: range.end,
        ..report
    }
}
