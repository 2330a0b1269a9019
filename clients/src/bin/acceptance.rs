//! `spindle-acceptance`: runs the Spindle acceptance suite.
//!
//! Executes every scenario in the feature files against a running Twine
//! and Quilt, then prints one line per step:
//!
//! ```text
//! [PASS] Collections / A collection holds ... / When "people.nq" is ingested into Twine — ingested ...
//! ```
//!
//! **Usage:**
//! ```text
//! spindle-acceptance [--config <file>] [--features <dir>] [FILES...]
//!                    [--twine <url>] [--quilt <url>] [--limit <n> | --no-limit]
//!                    [--json] [-v | -q]
//! ```
//!
//! Exits non-zero if any step failed or was undefined.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use spindle_acceptance::{discover_features, run_all, AcceptanceReport, Harness, StepRegistry};
use spindle_clients::{init_tracing, load_config};

/// Run the Spindle acceptance suite.
#[derive(Parser)]
#[command(
    name = "spindle-acceptance",
    version,
    about = "Check that Twine ingestion and Quilt collections agree on entity counts"
)]
struct Args {
    /// Configuration file (default: ./acceptance.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory searched for `*.feature` files when none are given.
    #[arg(long, default_value = "features")]
    features: PathBuf,

    /// Feature files to run instead of the whole directory.
    files: Vec<PathBuf>,

    /// Twine base URL, overriding the configuration file.
    #[arg(long)]
    twine: Option<String>,

    /// Quilt base URL, overriding the configuration file.
    #[arg(long)]
    quilt: Option<String>,

    /// Entity cap for graph fetches.
    #[arg(long, conflicts_with = "no_limit")]
    limit: Option<u32>,

    /// Fetch graphs without a `limit` parameter.
    #[arg(long)]
    no_limit: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Show debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Show errors only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(twine) = args.twine {
        config.twine.base_url = twine;
    }
    if let Some(quilt) = args.quilt {
        config.quilt.base_url = quilt;
    }
    if let Some(limit) = args.limit {
        config.quilt.limit = Some(limit);
    }
    if args.no_limit {
        config.quilt.limit = None;
    }

    let files = if args.files.is_empty() {
        discover_features(&args.features)?
    } else {
        args.files
    };
    if files.is_empty() {
        anyhow::bail!("no feature files found in {}", args.features.display());
    }

    let harness = Harness::new(config)?;
    let report = run_all(&harness, &StepRegistry::standard(), &files);

    if args.json {
        let body = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{body}");
    } else {
        print_report(&report);
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Acceptance FAILED: {failed} step(s) did not pass.");
        process::exit(1);
    }

    if !args.json {
        println!("Acceptance PASSED.");
    }
    Ok(())
}

fn print_report(report: &AcceptanceReport) {
    println!("Spindle Acceptance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {} / {} / {} — {}",
            result.severity.label(),
            result.feature,
            result.scenario,
            result.step,
            result.message
        );
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let summary = report.summary();
    println!();
    println!(
        "Summary: {} passed, {} pending, {} skipped, {} undefined, {} failed",
        summary.passed, summary.pending, summary.skipped, summary.undefined, summary.failed
    );
}
