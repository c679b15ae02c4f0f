//! Custom cargo commands for palsum.
//!
//! Usage:
//!   cargo xtask verify    - Tests, clippy, Kani proofs and a release sweep
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no Kani, no sweep)
//!   cargo xtask kani      - Run the Kani proofs only
//!   cargo xtask sweep     - Decompose every number in the reference ranges

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// `(base, from, to)` ranges the release binary must sweep without a failure.
const REFERENCE_SWEEPS: &[(u32, u128, u128)] = &[
    (10, 100, 1_000_000),
    (5, 25, 390_625),
    (7, 49, 117_649),
    (16, 256, 1_048_576),
    (36, 1_296, 1_679_616),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("sweep") => sweep()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + Kani + sweeps)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  kani      Run Kani proofs only
  sweep     Sweep the reference ranges with the release binary
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("palsum Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs done\n");

    println!("[4/4] Sweeping reference ranges...");
    sweep()?;
    println!("✓ Every reference range decomposed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no Kani, no sweep)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run the Kani proofs in the standalone crate
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    let available = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !available {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Sweep every reference range with the release binary
fn sweep() -> Result<()> {
    run_cargo(&["build", "--release", "--quiet"])?;
    let binary = project_root()?.join("target/release/palsum");

    for &(base, from, to) in REFERENCE_SWEEPS {
        println!("  base {:>2}: [{}, {})", base, from, to);
        let status = Command::new(&binary)
            .args([
                "sweep",
                "--base",
                &base.to_string(),
                "--from",
                &from.to_string(),
                "--to",
                &to.to_string(),
            ])
            .current_dir(project_root()?)
            .status()
            .with_context(|| format!("Failed to run {}", binary.display()))?;
        if !status.success() {
            bail!("sweep failed for base {} on [{}, {})", base, from, to);
        }
    }

    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
