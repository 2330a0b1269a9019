//! Error types for the acceptance harness.
//!
//! Every failure a step can hit is an [`AcceptanceError`]. [`ErrorKind`]
//! groups the variants so a report can tell an environment problem
//! (unreachable service, wrong status, broken payload) apart from the one
//! failure a scenario is written to detect: a failed assertion.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an [`AcceptanceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Connection refused, DNS failure, timeout, or unreadable file.
    Transport,
    /// The service answered with a status other than the expected one.
    UnexpectedStatus,
    /// The retrieved body is not a valid N-Triples document.
    MalformedGraph,
    /// A scenario assertion did not hold.
    Assertion,
    /// The scenario or configuration itself is unusable.
    Setup,
}

impl ErrorKind {
    /// Returns the label used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::UnexpectedStatus => "unexpected-status",
            ErrorKind::MalformedGraph => "malformed-graph",
            ErrorKind::Assertion => "assertion",
            ErrorKind::Setup => "setup",
        }
    }
}

/// Errors raised while executing acceptance steps.
#[derive(Debug, Error)]
pub enum AcceptanceError {
    /// An HTTP request could not be completed.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Target of the request.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// A TCP connection could not be established.
    #[error("could not connect to {address}: {source}")]
    Connect {
        /// `host:port` that was probed.
        address: String,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// A local file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The response status differs from the one the operation expects.
    #[error("{url} answered {actual}, expected {expected}")]
    UnexpectedStatus {
        /// Target of the request.
        url: String,
        /// Status the operation requires.
        expected: u16,
        /// Status actually returned.
        actual: u16,
    },

    /// A redirect arrived without a `Location` header.
    #[error("{url} answered {status} without a Location header")]
    MissingLocation {
        /// Target of the request.
        url: String,
        /// Status returned.
        status: u16,
    },

    /// The body could not be parsed as N-Triples.
    #[error("{source_uri} is not valid N-Triples: {message}")]
    MalformedGraph {
        /// Where the document came from.
        source_uri: String,
        /// Parser diagnostic.
        message: String,
    },

    /// An assertion failed.
    #[error("{message}")]
    Assertion {
        /// Summary of what did not hold.
        message: String,
        /// Supporting detail lines.
        details: Vec<String>,
    },

    /// A step needs a value an earlier step should have recorded.
    #[error("no {0} recorded earlier in this scenario")]
    MissingContext(&'static str),

    /// A string could not be turned into a usable URI.
    #[error("invalid URI {uri:?}: {message}")]
    InvalidUri {
        /// Offending input.
        uri: String,
        /// Reason it was rejected.
        message: String,
    },

    /// The configured class set is unusable.
    #[error("invalid class set: {0}")]
    InvalidTypeSet(String),

    /// A feature file could not be parsed.
    #[error("{}:{line}: {message}", .path.display())]
    Feature {
        /// Feature file path.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

impl AcceptanceError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AcceptanceError::Http { .. }
            | AcceptanceError::Connect { .. }
            | AcceptanceError::Read { .. } => ErrorKind::Transport,
            AcceptanceError::UnexpectedStatus { .. } | AcceptanceError::MissingLocation { .. } => {
                ErrorKind::UnexpectedStatus
            }
            AcceptanceError::MalformedGraph { .. } => ErrorKind::MalformedGraph,
            AcceptanceError::Assertion { .. } => ErrorKind::Assertion,
            AcceptanceError::MissingContext(_)
            | AcceptanceError::InvalidUri { .. }
            | AcceptanceError::InvalidTypeSet(_)
            | AcceptanceError::Feature { .. } => ErrorKind::Setup,
        }
    }

    /// Returns the detail lines attached to this error, if any.
    #[must_use]
    pub fn details(&self) -> &[String] {
        match self {
            AcceptanceError::Assertion { details, .. } => details,
            _ => &[],
        }
    }

    /// Builds an assertion failure.
    pub fn assertion(message: impl Into<String>, details: Vec<String>) -> Self {
        AcceptanceError::Assertion {
            message: message.into(),
            details,
        }
    }
}

/// Result alias used throughout the harness.
pub type Result<T, E = AcceptanceError> = std::result::Result<T, E>;
