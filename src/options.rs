// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for [`decompose_with`](crate::decompose_with).

use std::env;

use serde::Serialize;

use crate::closing::DEFAULT_STATE_BUDGET;
use crate::search::DEFAULT_BUDGET;

/// How hard the pipeline tries before reporting failure.
///
/// | Field              | Default   | Env var                    |
/// |--------------------|-----------|----------------------------|
/// | `max_repair_depth` | 4         | `PALSUM_MAX_REPAIR_DEPTH`  |
/// | `closing_budget`   | 2^18      | `PALSUM_CLOSING_BUDGET`    |
/// | `search_budget`    | 2^20      | `PALSUM_SEARCH_BUDGET`     |
/// | `fallback`         | `true`    | `PALSUM_NO_FALLBACK` (1/true/yes disables) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Inner pairs per palindrome the closing solver may re-open.
    pub max_repair_depth: usize,
    /// Column states the closing solver may visit per constructive attempt.
    pub closing_budget: u64,
    /// Candidates the palindrome search may examine.
    pub search_budget: u64,
    /// Try the shadowed category and then the search when the net category fails.
    pub fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_repair_depth: 4,
            closing_budget: DEFAULT_STATE_BUDGET,
            search_budget: DEFAULT_BUDGET,
            fallback: true,
        }
    }
}

impl Options {
    /// Constructive path for the net category only; its error is returned as is.
    pub fn strict() -> Self {
        Self {
            fallback: false,
            ..Self::default()
        }
    }

    /// Defaults overridden by `PALSUM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `PALSUM_*` keys.
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();

        if let Some(depth) = lookup("PALSUM_MAX_REPAIR_DEPTH") {
            if let Ok(depth) = depth.trim().parse::<usize>() {
                options.max_repair_depth = depth;
            }
        }

        if let Some(budget) = lookup("PALSUM_CLOSING_BUDGET") {
            if let Ok(budget) = budget.trim().parse::<u64>() {
                options.closing_budget = budget;
            }
        }

        if let Some(budget) = lookup("PALSUM_SEARCH_BUDGET") {
            if let Ok(budget) = budget.trim().parse::<u64>() {
                options.search_budget = budget;
            }
        }

        if let Some(flag) = lookup("PALSUM_NO_FALLBACK") {
            let flag = flag.trim();
            if flag == "1" || flag.eq_ignore_ascii_case("true") || flag.eq_ignore_ascii_case("yes")
            {
                options.fallback = false;
            }
        }

        options
    }
}
