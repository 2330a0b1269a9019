//! TCP liveness probe.
//!
//! A probe only asserts that something accepted a connection on
//! `host:port`; nothing is sent. Each resolved address gets its own
//! connect attempt bounded by the timeout.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{AcceptanceError, Result};

/// Connects to `host:port` and returns the address that accepted.
///
/// # Errors
///
/// Returns [`AcceptanceError::Connect`] if the name does not resolve or no
/// resolved address accepts a connection within `timeout`.
pub fn probe(host: &str, port: u16, timeout: Duration) -> Result<SocketAddr> {
    let address = format!("{host}:{port}");
    let candidates: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| AcceptanceError::Connect {
            address: address.clone(),
            source,
        })?
        .collect();

    let mut last_error = std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "name resolved to no addresses",
    );
    for candidate in candidates {
        debug!(%candidate, ?timeout, "probing");
        match TcpStream::connect_timeout(&candidate, timeout) {
            Ok(stream) => {
                stream
                    .set_read_timeout(Some(timeout))
                    .map_err(|source| AcceptanceError::Connect {
                        address: address.clone(),
                        source,
                    })?;
                info!(%address, %candidate, "service accepted a connection");
                return Ok(candidate);
            }
            Err(err) => last_error = err,
        }
    }
    Err(AcceptanceError::Connect {
        address,
        source: last_error,
    })
}
