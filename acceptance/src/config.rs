//! Harness configuration.
//!
//! Loaded from a TOML file; every field has a default matching the
//! docker-compose environment the suite normally runs in (`twine:8000`,
//! `quilt:80`, graphs capped at 200 entities).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::TypeSet;

/// Default cap on entities per fetched graph.
pub const DEFAULT_LIMIT: u32 = 200;

/// Complete harness configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcceptanceConfig {
    /// Twine ingestion service.
    pub twine: TwineConfig,
    /// Quilt query service.
    pub quilt: QuiltConfig,
    /// Network timeouts.
    pub timeouts: TimeoutConfig,
    /// Entity counting.
    pub counting: CountingConfig,
    /// Directory relative ingest paths are resolved against.
    pub data_dir: Option<PathBuf>,
}

/// `[twine]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwineConfig {
    /// Base URL of the Twine remote-control endpoint.
    pub base_url: String,
}

impl Default for TwineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://twine:8000".to_string(),
        }
    }
}

/// `[quilt]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuiltConfig {
    /// Base URL of Quilt.
    pub base_url: String,
    /// `limit` parameter for graph fetches; `None` omits it.
    pub limit: Option<u32>,
}

impl Default for QuiltConfig {
    fn default() -> Self {
        Self {
            base_url: "http://quilt".to_string(),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

/// `[timeouts]` section, in seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeoutConfig {
    /// Per-request HTTP timeout.
    pub http_secs: u64,
    /// Liveness probe connect/read timeout.
    pub probe_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_secs: 30,
            probe_secs: 120,
        }
    }
}

impl TimeoutConfig {
    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn http(&self) -> Duration {
        Duration::from_secs(self.http_secs)
    }

    /// Probe timeout as a [`Duration`].
    #[must_use]
    pub fn probe(&self) -> Duration {
        Duration::from_secs(self.probe_secs)
    }
}

/// `[counting]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountingConfig {
    /// Class IRIs to count, in order. Empty means the default
    /// persons-and-works set.
    pub classes: Vec<String>,
}

impl AcceptanceConfig {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this schema, a
    /// class is not an absolute IRI, or a timeout is zero.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.type_set()?;
        if config.timeouts.http_secs == 0 {
            anyhow::bail!("timeouts.http_secs must be at least 1");
        }
        if config.timeouts.probe_secs == 0 {
            anyhow::bail!("timeouts.probe_secs must be at least 1");
        }
        Ok(config)
    }

    /// The class set the counter should use.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured class is not an absolute IRI.
    pub fn type_set(&self) -> Result<TypeSet> {
        if self.counting.classes.is_empty() {
            return Ok(TypeSet::default());
        }
        Ok(TypeSet::new(self.counting.classes.iter().cloned())?)
    }

    /// Resolves an ingest path against `data_dir`.
    #[must_use]
    pub fn resolve_data_path(&self, path: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
