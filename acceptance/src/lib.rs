//! Spindle acceptance harness.
//!
//! Black-box acceptance tests for the Spindle stack. Scenarios written as
//! feature files drive Twine (ingestion) and Quilt (graph queries) over
//! HTTP and check the outcome by fetching N-Triples graphs and counting
//! typed entities in them.
//!
//! # Verification Model
//!
//! | Step | Service | Success signal |
//! |------|---------|----------------|
//! | probe | any TCP service | connection accepted |
//! | ingest | Twine `POST /ingest` | `200 OK` |
//! | count | Quilt `GET /everything.nt` | N-Triples body |
//! | resolve | Quilt `GET /?uri=` | `303 See Other` + `Location` |
//! | compare | Quilt `GET <location>.nt` | equal entity counts |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use spindle_acceptance::{discover_features, run_all, AcceptanceConfig, Harness, StepRegistry};
//!
//! let harness = Harness::new(AcceptanceConfig::default()).expect("Failed to build harness");
//! let features = discover_features(Path::new("features")).expect("Failed to list features");
//! let report = run_all(&harness, &StepRegistry::standard(), &features);
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod count;
pub mod error;
pub mod feature;
pub mod graph;
pub mod http;
pub mod location;
pub mod probe;
pub mod quilt;
pub mod report;
pub mod steps;
pub mod twine;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

pub use config::AcceptanceConfig;
pub use count::{count_entities, EntityCount, EntityCounter, EntityTally};
pub use error::{AcceptanceError, ErrorKind};
pub use feature::{Feature, Scenario};
pub use report::{AcceptanceReport, Scope, Severity, StepResult, Summary};
pub use steps::{Harness, ScenarioContext, Step, StepOutcome, StepRegistry};
pub use types::TypeSet;

/// Lists every `*.feature` file under `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or cannot be walked.
pub fn discover_features(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("features directory {} not found", dir.display());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let is_feature = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|x| x == "feature")
                .unwrap_or(false);
        if is_feature {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Runs every scenario of every feature file in order.
///
/// A file that fails to load or parse is recorded as a failure and the
/// remaining files still run.
pub fn run_all(harness: &Harness, registry: &StepRegistry, files: &[PathBuf]) -> AcceptanceReport {
    let mut report = AcceptanceReport::new();
    for path in files {
        match Feature::load(path) {
            Ok(feature) => report.extend(run_feature(harness, registry, &feature)),
            Err(err) => {
                warn!(file = %path.display(), error = %err, "feature file rejected");
                let name = path.display().to_string();
                let scope = Scope {
                    feature: &name,
                    scenario: "",
                };
                report.push(StepResult::fail(&scope, "", &err));
            }
        }
    }
    report
}

/// Runs every scenario of one feature.
pub fn run_feature(
    harness: &Harness,
    registry: &StepRegistry,
    feature: &Feature,
) -> AcceptanceReport {
    let mut report = AcceptanceReport::new();
    for scenario in &feature.scenarios {
        let scope = Scope {
            feature: &feature.name,
            scenario: &scenario.name,
        };
        report.extend(run_scenario(harness, registry, scope, scenario));
    }
    report
}

/// Runs one scenario with a fresh [`ScenarioContext`].
///
/// The first step that fails, is undefined, or is pending stops the
/// scenario; the steps after it are reported as skipped.
pub fn run_scenario(
    harness: &Harness,
    registry: &StepRegistry,
    scope: Scope<'_>,
    scenario: &Scenario,
) -> AcceptanceReport {
    info!(feature = scope.feature, scenario = scope.scenario, "scenario started");
    let mut report = AcceptanceReport::new();
    let mut ctx = ScenarioContext::default();
    let mut stopped = false;

    for line in &scenario.steps {
        let text = line.display();
        if stopped {
            report.push(StepResult::skipped(&scope, &text));
            continue;
        }
        let Some(step) = registry.parse(&line.text) else {
            warn!(step = %text, line = line.line, "undefined step");
            report.push(StepResult::undefined(&scope, &text));
            stopped = true;
            continue;
        };
        tracing::debug!(?step, "executing");
        match harness.execute(&step, &mut ctx) {
            Ok(StepOutcome::Passed(message)) => {
                report.push(StepResult::pass(&scope, &text, message));
            }
            Ok(StepOutcome::Pending(message)) => {
                report.push(StepResult::pending(&scope, &text, message));
                stopped = true;
            }
            Err(err) => {
                warn!(step = %text, kind = err.kind().as_str(), error = %err, "step failed");
                report.push(StepResult::fail(&scope, &text, &err));
                stopped = true;
            }
        }
    }
    report
}
