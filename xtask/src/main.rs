use std::path::Path;
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-pooling workspace",
    long_about = "A unified CLI for running the ridepool console, tests,\n\
                  benchmarks, and CI checks in the ride-pooling workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the ridepool console with the demo data
    Run {
        /// Start with an empty registry
        #[arg(long)]
        no_demo: bool,
        /// Log filter passed to the console (e.g. "pool_core=debug")
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Run the test suites of both crates
    Test,
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run benchmarks
    Bench,
    /// Run check + bench
    All,
}

// ── process plumbing ───────────────────────────────────────────────

fn section(title: &str) {
    eprintln!("\n=== {title} ===");
}

/// Echo and run `program args..`; a failure ends xtask with the child's exit code.
fn run(program: &str, args: &[&str]) {
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => {}
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("xtask: could not start {program}: {err}");
            exit(1);
        }
    }
}

const BENCH_ARGS: [&str; 5] = ["bench", "--package", "pool_core", "--bench", "performance"];

/// Cargo arguments for the performance bench, with Criterion flags after `--`.
fn bench_args<'a>(criterion_flags: &[&'a str]) -> Vec<&'a str> {
    let mut args = BENCH_ARGS.to_vec();
    if !criterion_flags.is_empty() {
        args.push("--");
        args.extend_from_slice(criterion_flags);
    }
    args
}

fn bench_with(criterion_flags: &[&str]) {
    run("cargo", &bench_args(criterion_flags));
}

// ── tasks ──────────────────────────────────────────────────────────

fn run_tests() {
    for package in ["pool_core", "pool_cli"] {
        section(&format!("Test {package}"));
        run("cargo", &["test", "-p", package]);
    }
}

fn ci_check() {
    section("Check formatting");
    run("cargo", &["fmt", "--all", "--", "--check"]);

    section("Clippy");
    run(
        "cargo",
        &["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"],
    );

    run_tests();

    section("Build pool_core without test helpers");
    run("cargo", &["build", "-p", "pool_core", "--no-default-features"]);
}

fn ci_bench() {
    section("Run benchmarks");
    bench_with(&[]);
}

/// Benchmark the stashed tree as baseline `main`, then the working tree against it.
fn bench_compare() {
    let criterion_dir = Path::new("target/criterion");
    if criterion_dir.exists() {
        section("Clearing old Criterion data");
        if let Err(err) = std::fs::remove_dir_all(criterion_dir) {
            eprintln!("xtask: could not clear {}: {err}", criterion_dir.display());
            exit(1);
        }
    }

    section("Baseline from the last commit");
    run("git", &["stash", "push", "-m", "xtask bench-compare"]);
    bench_with(&["--save-baseline", "main"]);
    run("git", &["stash", "pop"]);

    section("Working tree against baseline");
    bench_with(&["--baseline", "main"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { no_demo, log_level } => {
            let mut args = vec!["run", "-p", "pool_cli", "--bin", "ridepool", "--"];
            if no_demo {
                args.push("--no-demo");
            }
            if let Some(level) = log_level.as_deref() {
                args.extend(["--log-level", level]);
            }
            run("cargo", &args);
        }
        Commands::Test => run_tests(),
        Commands::Bench => ci_bench(),
        Commands::BenchCompare => bench_compare(),
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_bench();
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bench_flags_follow_separator() {
        assert_eq!(bench_args(&[]), BENCH_ARGS.to_vec());
        assert_eq!(
            bench_args(&["--baseline", "main"]),
            ["bench", "--package", "pool_core", "--bench", "performance", "--", "--baseline", "main"]
        );
    }
}
