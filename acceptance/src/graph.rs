//! Graph retrieval and N-Triples parsing.
//!
//! A [`Graph`] is a plain list of triples: every physical statement in the
//! document is kept, duplicates included. Graphs are fetched in full on
//! every call and never cached.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use sophia_api::source::TripleSource;
use sophia_api::term::SimpleTerm;
use sophia_turtle::parser::nt;
use tracing::debug;
use url::Url;

use crate::error::{AcceptanceError, Result};
use crate::http;

/// An in-memory graph with list semantics.
pub type Graph = Vec<[SimpleTerm<'static>; 3]>;

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns [`AcceptanceError::MalformedGraph`] if any line is not a valid
/// triple. A broken document never yields an empty graph.
pub fn parse_ntriples(body: &str, source_uri: &str) -> Result<Graph> {
    nt::parse_str(body)
        .collect_triples::<Graph>()
        .map_err(|err| AcceptanceError::MalformedGraph {
            source_uri: source_uri.to_string(),
            message: err.to_string(),
        })
}

/// Fetches graphs over HTTP(S) or from the local filesystem.
#[derive(Debug, Clone)]
pub struct GraphLoader {
    client: Client,
}

impl GraphLoader {
    /// Creates a loader whose HTTP requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout, true)?,
        })
    }

    /// Retrieves and parses the whole graph at `uri`.
    ///
    /// `http`/`https` URIs are fetched with a GET; `file` URIs and bare
    /// paths are read from disk.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the graph cannot be retrieved,
    /// [`AcceptanceError::UnexpectedStatus`] on a non-success response, and
    /// [`AcceptanceError::MalformedGraph`] if the body is not UTF-8 or does
    /// not parse.
    pub fn load(&self, uri: &str) -> Result<Graph> {
        let bytes = self.fetch(uri)?;
        let body = String::from_utf8(bytes).map_err(|err| AcceptanceError::MalformedGraph {
            source_uri: uri.to_string(),
            message: format!("body is not UTF-8: {}", err.utf8_error()),
        })?;
        let graph = parse_ntriples(&body, uri)?;
        debug!(uri, triples = graph.len(), "graph loaded");
        Ok(graph)
    }

    fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        match Url::parse(uri) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_http(url),
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|()| AcceptanceError::InvalidUri {
                    uri: uri.to_string(),
                    message: "file URI has no local path".to_string(),
                })?;
                read_file(&path)
            }
            Ok(url) => Err(AcceptanceError::InvalidUri {
                uri: uri.to_string(),
                message: format!("unsupported scheme {:?}", url.scheme()),
            }),
            Err(_) => read_file(&PathBuf::from(uri)),
        }
    }

    fn fetch_http(&self, url: Url) -> Result<Vec<u8>> {
        let target = url.to_string();
        let response = http::send(
            self.client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/n-triples, text/plain"),
            &target,
        )?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcceptanceError::UnexpectedStatus {
                url: target,
                expected: 200,
                actual: status.as_u16(),
            });
        }
        http::read_bytes(response, &target)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| AcceptanceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
