// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the palsum command-line interface.
//!
//! Three subcommands: `decompose` to split one number, `classify` to see which
//! family a number falls in, and `sweep` to decompose and verify a whole range.

pub mod display;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use palsum::{parse_symbols, Options};

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "PALSUM_LOG";

#[derive(Parser)]
#[command(
    name = "palsum",
    about = "Write any number as a sum of three palindromes",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decompose one number into three palindromes
    Decompose {
        /// The number to decompose (decimal unless --digits is given)
        number: String,

        /// Base of the palindromes
        #[arg(short, long, default_value = "10")]
        base: u32,

        /// Read NUMBER as base-BASE symbols (0-9, A-Z) instead of decimal
        #[arg(long)]
        digits: bool,

        /// Emit the decomposition as JSON
        #[arg(long)]
        json: bool,

        /// Only try the constructive path for the net category
        #[arg(long)]
        strict: bool,
    },

    /// Show the category of a number
    Classify {
        /// The number to classify (decimal unless --digits is given)
        number: String,

        /// Base to classify in
        #[arg(short, long, default_value = "10")]
        base: u32,

        /// Read NUMBER as base-BASE symbols (0-9, A-Z) instead of decimal
        #[arg(long)]
        digits: bool,
    },

    /// Decompose every number in [FROM, TO) and verify the results
    Sweep {
        /// Base of the palindromes
        #[arg(short, long, default_value = "10")]
        base: u32,

        /// First number (inclusive)
        #[arg(long)]
        from: u128,

        /// Last number (exclusive)
        #[arg(long)]
        to: u128,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,

        /// Only try the constructive path for the net category
        #[arg(long)]
        strict: bool,
    },
}

/// Parse a NUMBER argument.
pub fn parse_number(raw: &str, base: u32, digits: bool) -> Result<u128> {
    let raw = raw.trim().replace('_', "");
    if digits {
        parse_symbols(&raw, base)
            .with_context(|| format!("'{}' is not a base-{} number", raw, base))
    } else {
        raw.parse::<u128>()
            .with_context(|| format!("'{}' is not a decimal number", raw))
    }
}

/// Options from the environment, with `--strict` applied on top.
pub fn options(strict: bool) -> Options {
    let mut options = Options::from_env();
    if strict {
        options.fallback = false;
    }
    options
}

/// Filter directives for a `-v` count, falling back to `PALSUM_LOG`.
pub fn filter_directives(verbose: u8, env: Option<String>) -> String {
    match (verbose, env) {
        (0, Some(directives)) if !directives.trim().is_empty() => directives,
        (0, _) => "warn".to_string(),
        (1, _) => "palsum=debug".to_string(),
        _ => "palsum=trace".to_string(),
    }
}

/// Install the stderr subscriber.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let directives = filter_directives(verbose, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {} directives '{}'", LOG_ENV, directives))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(display::use_colors_stderr())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
