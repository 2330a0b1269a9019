//! Twine ingestion client.
//!
//! Twine exposes a remote-control endpoint that accepts an N-Quads document
//! and runs it through the ingestion pipeline before answering. Only the
//! status matters; the body is diagnostic text.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};
use url::Url;

use crate::error::{AcceptanceError, Result};
use crate::http;
use crate::location::endpoint_uri;

/// Media type Twine expects for ingested documents.
pub const NQUADS: &str = "text/x-nquads";

/// Status Twine answers with once a document has been ingested.
const INGESTED: u16 = 200;

/// Client for Twine's `POST /ingest` endpoint.
#[derive(Debug, Clone)]
pub struct TwineClient {
    client: Client,
    ingest_url: Url,
}

impl TwineClient {
    /// Creates a client for the Twine instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::InvalidUri`] if `base_url` does not parse
    /// and [`AcceptanceError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let ingest_url = endpoint_uri(base_url, "/ingest")?;
        Ok(Self {
            client: http::build_client(timeout, false)?,
            ingest_url,
        })
    }

    /// The endpoint documents are posted to.
    #[must_use]
    pub fn ingest_url(&self) -> &Url {
        &self.ingest_url
    }

    /// Posts the file at `path` for ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::Read`] if the file cannot be read, a
    /// transport error if Twine cannot be reached, and
    /// [`AcceptanceError::UnexpectedStatus`] unless Twine answers 200.
    pub fn ingest(&self, path: &Path) -> Result<()> {
        let body = std::fs::read(path).map_err(|source| AcceptanceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(file = %path.display(), bytes = body.len(), "ingesting into Twine");
        self.ingest_bytes(body)
    }

    /// Posts an in-memory N-Quads document for ingestion.
    ///
    /// # Errors
    ///
    /// Same as [`TwineClient::ingest`], minus the file read.
    pub fn ingest_bytes(&self, body: Vec<u8>) -> Result<()> {
        let target = self.ingest_url.to_string();
        let response = http::send(
            self.client
                .post(self.ingest_url.clone())
                .header(CONTENT_TYPE, NQUADS)
                .body(body),
            &target,
        )?;
        let status = response.status().as_u16();
        let log = http::read_text(response, &target).unwrap_or_default();
        debug!(status, log = %log, "Twine response");
        if status != INGESTED {
            return Err(AcceptanceError::UnexpectedStatus {
                url: target,
                expected: INGESTED,
                actual: status,
            });
        }
        Ok(())
    }
}
