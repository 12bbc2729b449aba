//! Streaming extraction of `.tgz` asset archives.
//!
//! The archive is read straight from any [`Read`] (an HTTP body in
//! production), decompressed and unpacked entry by entry, so nothing is
//! buffered to disk first. Entry paths are validated before unpacking to
//! prevent path traversal (zip-slip), including traversal through symlinks
//! unpacked earlier from the same archive.

use flate2::read::MultiGzDecoder;
use log::{trace, warn};
use std::io::Read;
use std::io::ErrorKind;
use std::path::{Component, Path};

/// Errors arising from archive extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The stream is not a valid gzip tar, or an entry could not be written.
    #[error("extraction I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path in the archive attempts to traverse outside the destination.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending path from the archive entry.
        path: String,
    },
}

/// Summary of a completed extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Number of entries unpacked.
    pub entries: usize,
}

/// Decompress and unpack a gzip tar stream into `dest_dir`.
///
/// Parent directories are created as needed; existing files are
/// overwritten. `dest_dir` itself must already exist.
///
/// # Errors
///
/// Returns [`ExtractionError::PathTraversal`] if any entry would escape
/// `dest_dir` (by its own path or through a symlink), or [`ExtractionError::Io`] if the stream is not a valid
/// gzip tar or an entry cannot be written.
pub fn extract_tgz<R: Read>(reader: R, dest_dir: &Path) -> Result<ExtractionSummary, ExtractionError> {
    let decoder = MultiGzDecoder::new(reader);
    let mut archive = tar::Archive::new(decoder);
    let mut summary = ExtractionSummary::default();
    let dest_root = dest_dir.canonicalize()?;

    for entry_result in archive.entries()? {
        let mut entry = entry_result?;
        let entry_path = entry.path()?.into_owned();

        validate_entry_path(&entry_path)?;
        validate_parent_inside(&dest_root, &entry_path)?;

        trace!("extract_tgz: {}", entry_path.display());
        if !entry.unpack_in(&dest_root)? {
            return Err(traversal(&entry_path));
        }
        summary.entries += 1;
    }

    if summary.entries == 0 {
        warn!("archive contained no entries");
    }
    Ok(summary)
}

/// Validate that a tar entry path does not escape the destination
/// directory via `..` components or absolute paths.
fn validate_entry_path(path: &Path) -> Result<(), ExtractionError> {
    let escapes = path.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(traversal(path));
    }
    Ok(())
}

/// Validate that the deepest existing ancestor of the entry's parent
/// resolves inside `dest_root`.
///
/// `dest_root` must be canonical. A symlink unpacked earlier (or already
/// present) that points outside the destination fails the check, as does a
/// dangling one.
fn validate_parent_inside(dest_root: &Path, entry_path: &Path) -> Result<(), ExtractionError> {
    let Some(parent) = entry_path.parent() else {
        return Ok(());
    };
    let mut existing = dest_root.join(parent);
    loop {
        match existing.canonicalize() {
            Ok(resolved) if resolved.starts_with(dest_root) => return Ok(()),
            Ok(_) => return Err(traversal(entry_path)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if std::fs::symlink_metadata(&existing).is_ok() {
                    return Err(traversal(entry_path));
                }
                if !existing.pop() {
                    return Ok(());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn traversal(path: &Path) -> ExtractionError {
    ExtractionError::PathTraversal {
        path: path.display().to_string(),
    }
}
