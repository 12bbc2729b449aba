//! Asset archive naming, packaging, download and extraction.
//!
//! # Sub-modules
//!
//! - [`asset_set`] - The ordered set of directories bundled into an archive.
//! - [`download`] - Archive source trait and HTTP implementation.
//! - [`error`] - Validation errors for version labels.
//! - [`exclusion`] - File-name patterns kept out of archives.
//! - [`extraction`] - Streaming `.tgz` extraction with path traversal checks.
//! - [`naming`] - Archive filename and release tag policy.
//! - [`packaging`] - Deterministic archive creation.
//! - [`packaging_error`] - Error types for packaging operations.
//! - [`release`] - Release reference and download URL construction.
//! - [`version`] - Version label newtype (`VersionLabel`).

pub mod asset_set;
pub mod download;
pub mod error;
pub mod exclusion;
pub mod extraction;
pub mod naming;
pub mod packaging;
pub mod packaging_error;
pub mod release;
pub mod version;
