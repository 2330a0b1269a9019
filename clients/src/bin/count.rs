//! `spindle-count`: counts typed entities in one N-Triples graph.
//!
//! **Usage:**
//! ```text
//! spindle-count <URI> [--class <iri>]... [--config <file>] [--json]
//! ```
//!
//! `URI` may be an `http(s)` URL, a `file://` URL or a local path. Without
//! `--class` the configured class set is used (Works and Persons by
//! default).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spindle_acceptance::graph::GraphLoader;
use spindle_acceptance::{EntityCounter, TypeSet};
use spindle_clients::{init_tracing, load_config};

/// Count typed entities in an N-Triples graph.
#[derive(Parser)]
#[command(name = "spindle-count", version, about = "Count typed entities in an N-Triples graph")]
struct Args {
    /// Graph location.
    uri: String,

    /// Class IRI or known CURIE such as `foaf:Person`; repeatable.
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Configuration file (default: ./acceptance.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the tally as JSON.
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

    let config = load_config(args.config.as_deref())?;
    let types = if args.classes.is_empty() {
        config.type_set()?
    } else {
        TypeSet::new(args.classes.iter().map(|c| expand_class(c)))?
    };

    let loader = GraphLoader::new(config.timeouts.http())?;
    let counter = EntityCounter::new(loader, types);
    let tally = counter
        .tally(&args.uri)
        .with_context(|| format!("Failed to count entities in {}", args.uri))?;

    if args.json {
        let body = serde_json::json!({
            "uri": args.uri,
            "total": tally.total(),
            "classes": tally.rows,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", tally.total());
    for line in tally.lines() {
        println!("  {line}");
    }
    Ok(())
}

/// Expands a known CURIE to its IRI; anything else is passed through.
fn expand_class(class: &str) -> String {
    spindle_vocab::find_curie(class)
        .map_or_else(|| class.to_string(), |known| known.iri.to_string())
}
