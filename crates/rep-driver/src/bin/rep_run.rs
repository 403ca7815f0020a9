//! CLI for driving random operation scripts against the container fixtures.
//!
//! # Usage
//!
//! ```bash
//! # Drive the stack with a random seed
//! cargo run -p rep-driver --features cli --bin rep-run -- --fixture stack
//!
//! # Reproduce a run and save the report
//! cargo run -p rep-driver --features cli --bin rep-run -- \
//!     --fixture bad-queue --seed 12345 --ops 500 --json report.json
//! ```
//!
//! The exit code reflects whether the rep survived, so driving `bad-queue`
//! is expected to exit non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rep_driver::{run_fixture, seed_from_env, Fixture};

#[derive(Parser)]
#[command(name = "rep-run", about = "Drive random op scripts against rep-checked fixtures")]
struct Args {
    /// Fixture to drive: stack, queue, or bad-queue
    #[arg(long, default_value = "stack")]
    fixture: String,

    /// Number of operations to generate
    #[arg(long, default_value_t = 1000)]
    ops: usize,

    /// Seed for the script (overrides REP_SEED; random if neither is set)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Suppress the human-readable summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let fixture = match Fixture::parse(&args.fixture) {
        Some(fixture) => fixture,
        None => {
            eprintln!("Error: unknown fixture '{}'", args.fixture);
            eprintln!("Expected one of: stack, queue, bad-queue");
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(seed_from_env);
    let report = run_fixture(fixture, seed, args.ops);

    if !args.quiet {
        println!("{}", report.format_summary());
    }

    if let Some(path) = &args.json {
        if let Err(e) = report.write_json(path) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        if !args.quiet {
            println!("Report written to {}", path.display());
        }
    }

    if report.rep_held {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
