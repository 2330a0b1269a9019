//! Building graph-fetch URIs from Quilt paths.

use url::Url;

use crate::error::{AcceptanceError, Result};

/// Forms the N-Triples URI for a Quilt resource.
///
/// `path` is either a server-relative path (`/everything`, or the
/// `Location` of a collection redirect) which is appended to `base`, or an
/// absolute URI which replaces it. Quilt redirects to `/<id>#id`; the
/// fragment names the thing, not the document, so it is dropped before the
/// `.nt` suffix is added. `limit` becomes the `limit` query parameter.
///
/// # Errors
///
/// Returns [`AcceptanceError::InvalidUri`] if the result is not a URI.
pub fn graph_uri(base: &str, path: &str, limit: Option<u32>) -> Result<Url> {
    let joined = if Url::parse(path).is_ok() {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    };

    let mut url = Url::parse(&joined).map_err(|err| AcceptanceError::InvalidUri {
        uri: joined.clone(),
        message: err.to_string(),
    })?;
    url.set_fragment(None);
    url.set_query(None);
    let document = format!("{}.nt", url.path().trim_end_matches('/'));
    url.set_path(&document);
    if let Some(limit) = limit {
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
    }
    Ok(url)
}

/// Forms the URI of a service endpoint under `base`.
///
/// `path` is appended to `base` as text, so any path prefix on the base
/// (a service mounted at `http://host/quilt`) is kept.
///
/// # Errors
///
/// Returns [`AcceptanceError::InvalidUri`] if the result is not a URI.
pub fn endpoint_uri(base: &str, path: &str) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|err| AcceptanceError::InvalidUri {
        uri: base.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_with_limit() {
        let url = graph_uri("http://quilt", "/everything", Some(200)).unwrap();
        assert_eq!(url.as_str(), "http://quilt/everything.nt?limit=200");
    }

    #[test]
    fn redirect_location_drops_fragment() {
        let url = graph_uri("http://quilt/", "/3f2a9c#id", Some(200)).unwrap();
        assert_eq!(url.as_str(), "http://quilt/3f2a9c.nt?limit=200");
    }

    #[test]
    fn no_limit_means_no_query() {
        let url = graph_uri("http://quilt", "/everything", None).unwrap();
        assert_eq!(url.as_str(), "http://quilt/everything.nt");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let url = graph_uri("http://host/quilt", "/abc", None).unwrap();
        assert_eq!(url.as_str(), "http://host/quilt/abc.nt");
    }

    #[test]
    fn absolute_location_replaces_base() {
        let url = graph_uri("http://quilt", "http://other:8080/abc#id", Some(5)).unwrap();
        assert_eq!(url.as_str(), "http://other:8080/abc.nt?limit=5");
    }

    #[test]
    fn unparseable_base_is_invalid() {
        let err = graph_uri("not a base", "/x", None).unwrap_err();
        assert!(matches!(err, AcceptanceError::InvalidUri { .. }));
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = endpoint_uri("http://host/quilt", "/").unwrap();
        assert_eq!(url.as_str(), "http://host/quilt/");
        let url = endpoint_uri("http://host/twine/", "/ingest").unwrap();
        assert_eq!(url.as_str(), "http://host/twine/ingest");
    }

    #[test]
    fn endpoint_at_root() {
        assert_eq!(endpoint_uri("http://quilt", "/").unwrap().as_str(), "http://quilt/");
        assert_eq!(
            endpoint_uri("http://twine:8000", "/ingest").unwrap().as_str(),
            "http://twine:8000/ingest"
        );
    }

    #[test]
    fn endpoint_rejects_bad_base() {
        let err = endpoint_uri("twine", "/ingest").unwrap_err();
        assert!(matches!(err, AcceptanceError::InvalidUri { .. }));
    }
}
