//! Asset fetch orchestrator.
//!
//! Downloads a published asset archive and unpacks it into a destination
//! directory in one streaming pass: the HTTP body feeds the gzip decoder,
//! which feeds the tar extractor. A single attempt is made; a failure part
//! way through leaves whatever was already extracted in place.

use crate::artefact::asset_set::AssetDirectorySet;
use crate::artefact::download::{ArchiveSource, DownloadError, HttpSource};
use crate::artefact::extraction::{ExtractionError, extract_tgz};
use crate::artefact::release::ReleaseReference;
use crate::output::write_line;
use camino::Utf8PathBuf;
use log::{debug, warn};
use std::io::Write;

/// Configuration for a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// The release the archive is published under.
    pub reference: ReleaseReference,
    /// Directory the archive is extracted into; created if absent.
    pub dest: Utf8PathBuf,
}

/// Output produced by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    /// The URL the archive was downloaded from.
    pub url: String,
    /// The directory the archive was extracted into.
    pub dest: Utf8PathBuf,
    /// Number of archive entries extracted.
    pub entries: usize,
}

/// Errors arising from a fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The destination directory could not be created.
    #[error("failed to create destination {path}: {source}")]
    Destination {
        /// The destination that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The archive could not be downloaded.
    #[error("network failure: {0}")]
    Network(#[from] DownloadError),

    /// The downloaded stream is not a valid gzip tar archive.
    #[error("corrupt archive: {0}")]
    CorruptArchive(#[from] ExtractionError),
}

/// Fetch and extract the configured archive over HTTP.
///
/// # Errors
///
/// See [`fetch_assets_with`].
pub fn fetch_assets(config: &FetchConfig, out: &mut dyn Write) -> Result<FetchOutput, FetchError> {
    fetch_assets_with(config, &HttpSource, out)
}

/// Testable inner function with an injected archive source.
///
/// Creates the destination, writes a `Downloading` line, streams the archive
/// into the destination and writes a confirmation line. Asset directories the
/// notebooks expect but the archive did not provide are logged as warnings.
///
/// # Errors
///
/// Returns [`FetchError::Destination`] if the destination cannot be created,
/// [`FetchError::Network`] if the download fails, and
/// [`FetchError::CorruptArchive`] if the stream cannot be extracted.
pub fn fetch_assets_with(
    config: &FetchConfig,
    source: &dyn ArchiveSource,
    out: &mut dyn Write,
) -> Result<FetchOutput, FetchError> {
    std::fs::create_dir_all(&config.dest).map_err(|source| FetchError::Destination {
        path: config.dest.clone(),
        source,
    })?;

    let url = config.reference.download_url();
    write_line(out, format!("Downloading {url}..."));

    let body = source.open(&url)?;
    let summary = extract_tgz(body, config.dest.as_std_path())?;
    debug!("extracted {} entries into {}", summary.entries, config.dest);

    for missing in AssetDirectorySet::default().missing_under(&config.dest) {
        warn!("archive did not provide asset directory {missing}");
    }

    write_line(out, format!("Assets extracted to {}", config.dest));
    Ok(FetchOutput {
        url,
        dest: config.dest.clone(),
        entries: summary.entries,
    })
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
