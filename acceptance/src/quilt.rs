//! Quilt client: collection resolution and graph addressing.
//!
//! Quilt resolves an arbitrary identifying URI to the collection that holds
//! it: `GET /?uri=<id>` answers `303 See Other` with the collection's own
//! path in `Location`. Graph documents live at `<path>.nt`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use tracing::info;
use url::Url;

use crate::error::{AcceptanceError, Result};
use crate::http;
use crate::location::{endpoint_uri, graph_uri};

/// Status Quilt answers a successful lookup with.
const SEE_OTHER: u16 = 303;

/// Client for a Quilt instance.
#[derive(Debug, Clone)]
pub struct QuiltClient {
    client: Client,
    base_url: String,
    limit: Option<u32>,
}

impl QuiltClient {
    /// Creates a client for the Quilt instance at `base_url`; graph URIs it
    /// builds carry `limit` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::InvalidUri`] if `base_url` does not parse
    /// and [`AcceptanceError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, limit: Option<u32>, timeout: Duration) -> Result<Self> {
        Url::parse(base_url).map_err(|err| AcceptanceError::InvalidUri {
            uri: base_url.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            client: http::build_client(timeout, false)?,
            base_url: base_url.to_string(),
            limit,
        })
    }

    /// URI of the `/everything` graph.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::InvalidUri`] if the URI cannot be formed.
    pub fn everything_uri(&self) -> Result<Url> {
        graph_uri(&self.base_url, spindle_vocab::everything_index().path, self.limit)
    }

    /// URI of the graph behind a resolved collection location.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::InvalidUri`] if the URI cannot be formed.
    pub fn collection_uri(&self, location: &str) -> Result<Url> {
        graph_uri(&self.base_url, location, self.limit)
    }

    /// Resolves `collection` to the location of its collection.
    ///
    /// Redirects are not followed; the `Location` header is returned as is.
    ///
    /// # Errors
    ///
    /// Returns a transport error if Quilt cannot be reached,
    /// [`AcceptanceError::UnexpectedStatus`] unless Quilt answers 303, and
    /// [`AcceptanceError::MissingLocation`] if the 303 has no `Location`.
    pub fn resolve(&self, collection: &str) -> Result<String> {
        let mut url = endpoint_uri(&self.base_url, "/")?;
        url.query_pairs_mut().append_pair("uri", collection);
        let target = url.to_string();

        let response = http::send(self.client.get(url), &target)?;
        http::expect_status(&response, &target, SEE_OTHER)?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(AcceptanceError::MissingLocation {
                url: target,
                status: SEE_OTHER,
            })?;
        info!(collection, location = %location, "collection resolved");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(limit: Option<u32>) -> QuiltClient {
        QuiltClient::new("http://quilt", limit, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn everything_uri_matches_quilt_layout() {
        assert_eq!(
            client(Some(200)).everything_uri().unwrap().as_str(),
            "http://quilt/everything.nt?limit=200"
        );
    }

    #[test]
    fn collection_uri_uses_location() {
        assert_eq!(
            client(None).collection_uri("/9bd1#id").unwrap().as_str(),
            "http://quilt/9bd1.nt"
        );
    }

    #[test]
    fn resolver_and_graphs_share_base_path() {
        let mut server = mockito::Server::new();
        let mounted = server
            .mock("GET", "/quilt/")
            .match_query(mockito::Matcher::UrlEncoded(
                "uri".into(),
                "http://example.com/c".into(),
            ))
            .with_status(303)
            .with_header("location", "/abc#id")
            .create();
        let root = server.mock("GET", "/").match_query(mockito::Matcher::Any).expect(0).create();

        let base = format!("{}/quilt", server.url());
        let quilt = QuiltClient::new(&base, Some(200), Duration::from_secs(5)).unwrap();
        let location = quilt.resolve("http://example.com/c").unwrap();
        assert_eq!(location, "/abc#id");
        assert_eq!(
            quilt.collection_uri(&location).unwrap().as_str(),
            format!("{base}/abc.nt?limit=200")
        );
        mounted.assert();
        root.assert();
    }

    #[test]
    fn bad_base_is_rejected() {
        assert!(QuiltClient::new("::", None, Duration::from_secs(1)).is_err());
    }
}
