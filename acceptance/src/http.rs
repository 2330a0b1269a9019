//! Shared blocking HTTP plumbing for the Twine, Quilt and graph clients.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::redirect::Policy;

use crate::error::{AcceptanceError, Result};

const USER_AGENT: &str = concat!("spindle-acceptance/", env!("CARGO_PKG_VERSION"));

/// Builds a blocking client with the given timeout.
///
/// With `follow_redirects` unset the client hands 3xx responses back to the
/// caller, which is what collection resolution needs.
///
/// # Errors
///
/// Returns [`AcceptanceError::Http`] if the TLS backend cannot be set up.
pub fn build_client(timeout: Duration, follow_redirects: bool) -> Result<Client> {
    let policy = if follow_redirects {
        Policy::limited(10)
    } else {
        Policy::none()
    };
    Client::builder()
        .timeout(timeout)
        .redirect(policy)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| AcceptanceError::Http {
            url: "(client setup)".to_string(),
            source,
        })
}

/// Sends a request, mapping client failures to a transport error for `url`.
///
/// # Errors
///
/// Returns [`AcceptanceError::Http`] on connection failure or timeout.
pub fn send(request: RequestBuilder, url: &str) -> Result<Response> {
    request.send().map_err(|source| AcceptanceError::Http {
        url: url.to_string(),
        source,
    })
}

/// Fails unless the response carries exactly `expected`.
///
/// # Errors
///
/// Returns [`AcceptanceError::UnexpectedStatus`] on any other status.
pub fn expect_status(response: &Response, url: &str, expected: u16) -> Result<()> {
    let actual = response.status().as_u16();
    if actual == expected {
        Ok(())
    } else {
        Err(AcceptanceError::UnexpectedStatus {
            url: url.to_string(),
            expected,
            actual,
        })
    }
}

/// Reads a response body as text.
///
/// # Errors
///
/// Returns [`AcceptanceError::Http`] if the body cannot be read or decoded.
pub fn read_text(response: Response, url: &str) -> Result<String> {
    response.text().map_err(|source| AcceptanceError::Http {
        url: url.to_string(),
        source,
    })
}

/// Reads a response body as raw bytes, leaving decoding to the caller.
///
/// # Errors
///
/// Returns [`AcceptanceError::Http`] if the body cannot be read.
pub fn read_bytes(response: Response, url: &str) -> Result<Vec<u8>> {
    response
        .bytes()
        .map(|body| body.to_vec())
        .map_err(|source| AcceptanceError::Http {
            url: url.to_string(),
            source,
        })
}
