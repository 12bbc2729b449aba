//! Repository root discovery.
//!
//! Asset paths are stored relative to the repository root, so the archiver
//! first locates the nearest enclosing git checkout. A checkout is any
//! directory holding a `.git` entry: a directory for ordinary clones, or a
//! file for worktrees and submodules.

use crate::artefact::packaging_error::PackagingError;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

/// Name of the entry that marks a repository root.
const GIT_MARKER: &str = ".git";

/// Return the nearest ancestor of `start` (inclusive) that is a repository
/// root.
///
/// # Errors
///
/// Returns [`PackagingError::NotInRepository`] if no ancestor contains a
/// `.git` entry.
pub fn find_repository_root(start: &Utf8Path) -> Result<Utf8PathBuf, PackagingError> {
    search(start, None)
}

/// Like [`find_repository_root`], but never looks above `ceiling`.
///
/// `ceiling` itself is still checked, so a checkout rooted exactly at the
/// ceiling is found.
///
/// # Errors
///
/// Returns [`PackagingError::NotInRepository`] if no directory between
/// `start` and `ceiling` contains a `.git` entry.
pub fn find_repository_root_within(
    start: &Utf8Path,
    ceiling: &Utf8Path,
) -> Result<Utf8PathBuf, PackagingError> {
    search(start, Some(ceiling))
}

fn search(start: &Utf8Path, ceiling: Option<&Utf8Path>) -> Result<Utf8PathBuf, PackagingError> {
    let root = start
        .ancestors()
        .take_while(|dir| ceiling.is_none_or(|limit| dir.starts_with(limit)))
        .find(|dir| dir.join(GIT_MARKER).exists())
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| PackagingError::NotInRepository {
            start: start.to_path_buf(),
        })?;
    debug!("repository root for {start} is {root}");
    Ok(root)
}

/// Return the repository root enclosing the current working directory.
///
/// # Errors
///
/// Returns [`PackagingError::Io`] if the working directory cannot be read or
/// is not valid UTF-8, and [`PackagingError::NotInRepository`] if it is not
/// inside a checkout.
pub fn current_repository_root() -> Result<Utf8PathBuf, PackagingError> {
    let cwd = std::env::current_dir()?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
        PackagingError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("current directory is not valid UTF-8: {e}"),
        ))
    })?;
    find_repository_root(&cwd)
}
