// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;

use palsum::{classify, decompose_with, to_symbols, Decomposition, Number, SweepReport};

mod cli;
use cli::display::{
    category_badge, pad_left, row, section_bot, section_top, status, strategy_label, term_symbols,
    themed, BOLD, GRAY, RED,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::init_tracing(cli.verbose) {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decompose {
            number,
            base,
            digits,
            json,
            strict,
        } => {
            let n = cli::parse_number(&number, base, digits)?;
            let d = decompose_with(n, base, &cli::options(strict))
                .with_context(|| format!("cannot decompose {} in base {}", n, base))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&d)?);
            } else {
                print_decomposition(&d);
            }
        }
        Commands::Classify {
            number,
            base,
            digits,
        } => {
            let n = cli::parse_number(&number, base, digits)?;
            let parsed = Number::new(n, base)?;
            let class = classify(&parsed)
                .with_context(|| format!("cannot classify {} in base {}", n, base))?;
            let shadowed = class
                .shadowed
                .map_or_else(|| themed(GRAY, &[], "none"), category_badge);
            println!(
                "{} (base {}): {}  shadowed: {}",
                n,
                base,
                category_badge(class.category),
                shadowed
            );
        }
        Commands::Sweep {
            base,
            from,
            to,
            json,
            strict,
        } => {
            if from >= to {
                bail!("empty range [{}, {})", from, to);
            }
            let report = run_sweep(base, from, to, &cli::options(strict), !json);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            if !report.is_clean() {
                bail!("{} of {} numbers failed", report.failed, to - from);
            }
        }
    }
    Ok(())
}

/// Progress on stderr while a sweep runs; silent without a TTY or the feature.
struct Ticker {
    #[cfg(feature = "progress")]
    bar: indicatif::ProgressBar,
}

impl Ticker {
    #[cfg(feature = "progress")]
    fn new(len: u64, interactive: bool) -> Self {
        use indicatif::{ProgressBar, ProgressStyle};

        if !interactive || !atty::is(atty::Stream::Stderr) {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        ) {
            bar.set_style(style.progress_chars("━━╸"));
        }
        bar.set_prefix("sweep");
        Self { bar }
    }

    #[cfg(not(feature = "progress"))]
    fn new(_len: u64, _interactive: bool) -> Self {
        Self {}
    }

    fn inc(&self, _k: u64) {
        #[cfg(feature = "progress")]
        self.bar.inc(_k);
    }

    fn finish(&self) {
        #[cfg(feature = "progress")]
        self.bar.finish_and_clear();
    }
}

fn run_sweep(
    base: u32,
    from: u128,
    to: u128,
    options: &palsum::Options,
    interactive: bool,
) -> SweepReport {
    let ticker = Ticker::new(u64::try_from(to - from).unwrap_or(u64::MAX), interactive);

    #[cfg(feature = "parallel")]
    let report = palsum::sweep::par_sweep(base, from..to, options, |k| ticker.inc(k));
    #[cfg(not(feature = "parallel"))]
    let report = palsum::sweep(base, from..to, options, |_| ticker.inc(1));

    ticker.finish();
    report
}

/// Symbols when the base has an alphabet, digit lists otherwise.
fn render(value: u128, digits: &[u32], base: u32) -> String {
    to_symbols(value, base).unwrap_or_else(|_| term_symbols(digits, base))
}

fn print_decomposition(d: &Decomposition) {
    let n_digits = palsum::to_digits(d.n, d.base).unwrap_or_default();
    let width = render(d.n, &n_digits, d.base).len() + 2;

    section_top(&format!("{} in base {}", d.n, d.base));
    row(&format!(
        "  n  {}",
        pad_left(&render(d.n, &n_digits, d.base), width)
    ));
    for (i, term) in d.terms.iter().enumerate() {
        row(&format!(
            "  p{} {}   = {}",
            i + 1,
            pad_left(&render(term.value(), term.digits(), d.base), width),
            term.value()
        ));
    }
    let category = d
        .category
        .map_or_else(|| themed(GRAY, &[], "-"), category_badge);
    row(&format!(
        "  category {}  strategy {}  repair {}  special {}",
        category,
        strategy_label(d.strategy),
        d.repair_depth,
        d.is_special
    ));
    section_bot();
}

fn print_report(report: &SweepReport) {
    section_top(&format!(
        "sweep [{}, {}) base {}",
        report.from, report.to, report.base
    ));
    row(&format!(
        "  decomposed {}  repaired {}  skipped {}  special {}  {}",
        report.decomposed,
        report.repaired,
        report.skipped,
        report.special,
        status(report.is_clean())
    ));
    for (strategy, count) in &report.by_strategy {
        row(&format!(
            "  {} {}",
            pad_left(&strategy_label(*strategy), 14),
            count
        ));
    }
    for (category, count) in &report.by_category {
        row(&format!("  {} {}", pad_left(category, 14), count));
    }
    for failure in &report.failures {
        row(&format!(
            "  {} {}: {}",
            themed(RED, &[], "x"),
            failure.n,
            failure.error
        ));
    }
    section_bot();
}
