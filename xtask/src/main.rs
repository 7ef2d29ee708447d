//! Development automation tasks for the `CampusCal` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::Context;

/// Crates whose tests and lints CI covers
const WORKSPACE_CRATES: [&str; 3] = ["campuscal-domain", "campuscal-core", "campuscal-infra"];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("CampusCal Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, test, bench build, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints on the engine crates");
    println!("    test      Run all tests");
    println!("    bench     Run the aggregation benchmarks");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/6: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/6: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/6: Running tests...");
    run_test()?;

    println!("\n==> Step 4/6: Building benchmarks...");
    cargo(&["bench", "-p", "campuscal-core", "--no-run"], "Benchmarks failed to build")?;

    println!("\n==> Step 5/6: Checking dependencies...");
    run_deny()?;

    println!("\n==> Step 6/6: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

/// Run Clippy lints, one crate at a time so failures name the crate
fn run_clippy() -> anyhow::Result<()> {
    for krate in WORKSPACE_CRATES {
        println!("Linting {krate}...");
        cargo(&["clippy", "-p", krate, "--all-targets"], &format!("Clippy failed for {krate}"))?;
    }
    Ok(())
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

/// Run the criterion benchmarks
fn run_bench() -> anyhow::Result<()> {
    cargo(&["bench", "-p", "campuscal-core"], "Benchmarks failed")
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    require_subcommand("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

/// Audit dependencies for security vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    require_subcommand("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

/// Run `cargo <args>`, failing with `failure` on a non-zero exit
fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}

/// Ensure an optional cargo subcommand is installed
fn require_subcommand(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let check_installed = Command::new("cargo").args([subcommand, "--version"]).output();

    if !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        anyhow::bail!("{package} not found");
    }

    Ok(())
}
