//! Archive download for published asset releases.
//!
//! Provides a trait-based abstraction over opening the archive byte stream,
//! enabling dependency injection for testing. The HTTP implementation makes a
//! single unauthenticated GET with no retry and no timeout.

use log::debug;
use std::io::Read;
use std::sync::OnceLock;

/// Trait for opening a remote archive as a byte stream.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::download::HttpSource;
///
/// let source = HttpSource;
/// // Use source.open(url) in production
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveSource {
    /// Open `url` and return a reader over the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    fn open(&self, url: &str) -> Result<Box<dyn Read>, DownloadError>;
}

/// Errors arising from archive download operations.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// HTTP request failed or returned a non-success status.
    #[error("download failed for {url}: {reason}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The requested archive was not found (HTTP 404).
    #[error("archive not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },
}

/// HTTP-based archive source using `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl ArchiveSource for HttpSource {
    fn open(&self, url: &str) -> Result<Box<dyn Read>, DownloadError> {
        debug!("GET {url}");
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        debug!("{url} answered {}", response.status());
        Ok(Box::new(response.into_body().into_reader()))
    }
}

/// Shared `ureq` agent.
///
/// Non-success statuses surface as [`ureq::Error::StatusCode`], which is
/// `ureq`'s default.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(true)
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`DownloadError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> DownloadError {
    match err {
        ureq::Error::StatusCode(404) => DownloadError::NotFound {
            url: url.to_owned(),
        },
        other => DownloadError::HttpError {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn map_ureq_error_maps_404_to_not_found() {
        let err = ureq::Error::StatusCode(404);
        let mapped = map_ureq_error("https://example.test/archive.tgz", &err);
        assert!(matches!(mapped, DownloadError::NotFound { .. }));
    }

    #[rstest]
    #[case::server_error(500)]
    #[case::forbidden(403)]
    #[case::unavailable(503)]
    fn map_ureq_error_maps_other_status_to_http_error(#[case] status: u16) {
        let err = ureq::Error::StatusCode(status);
        let mapped = map_ureq_error("https://example.test/archive.tgz", &err);
        assert!(matches!(mapped, DownloadError::HttpError { .. }));
        assert!(mapped.to_string().contains("https://example.test/archive.tgz"));
    }

    #[test]
    fn unreachable_host_is_an_http_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr").port()
        };
        let url = format!("http://127.0.0.1:{port}/workshop-assets-20250725.tgz");
        let result = HttpSource.open(&url);
        assert!(matches!(result, Err(DownloadError::HttpError { .. })));
    }
}
