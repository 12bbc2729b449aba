//! Error types for asset packaging operations.
//!
//! Covers repository discovery, source directory validation, directory
//! traversal and archive I/O failures.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors arising from asset packaging operations.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// No repository root was found above the starting directory.
    #[error("not inside a git repository (searched upwards from {start})")]
    NotInRepository {
        /// The directory the search started from.
        start: Utf8PathBuf,
    },

    /// A required asset directory is absent or not a directory.
    #[error("missing asset directory: {path}")]
    MissingAssetDirectory {
        /// The missing directory, relative to the repository root.
        path: Utf8PathBuf,
    },

    /// The output directory lies inside an asset directory, so the archive
    /// would be collected into itself.
    #[error("output directory {output_dir} is inside asset directory {directory}")]
    OutputInsideAssets {
        /// The requested output directory.
        output_dir: Utf8PathBuf,
        /// The asset directory containing it, relative to the repository
        /// root.
        directory: Utf8PathBuf,
    },

    /// Walking an asset directory failed.
    #[error("failed to walk asset directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// An exclusion pattern did not compile.
    #[error("invalid exclusion pattern: {0}")]
    InvalidExclusion(#[from] globset::Error),

    /// An I/O operation failed (reading sources, writing the archive).
    #[error("I/O error during packaging: {0}")]
    Io(#[from] std::io::Error),
}
