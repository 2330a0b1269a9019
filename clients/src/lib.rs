//! Shared setup for the Spindle client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use spindle_acceptance::AcceptanceConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SPINDLE_LOG";

/// Configuration file picked up from the working directory when no
/// `--config` is given.
pub const DEFAULT_CONFIG: &str = "acceptance.toml";

/// Installs the stderr tracing subscriber.
///
/// `SPINDLE_LOG` wins when set; otherwise `--quiet` shows errors only,
/// `--verbose` shows debug output and the default is warnings.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Loads the harness configuration.
///
/// An explicit path must exist. Without one, `acceptance.toml` in the
/// working directory is used if present, else the built-in defaults.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<AcceptanceConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.is_file() {
                tracing::debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(AcceptanceConfig::default());
            }
            fallback
        }
    };
    tracing::debug!(config = %path.display(), "loading configuration");
    AcceptanceConfig::load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[quilt]\nlimit = 50\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.quilt.limit, Some(50));
    }
}
