//! Asset archive packaging.
//!
//! Bundles the asset directory set into `workshop-assets-<version>.tgz`.
//! Output is reproducible: entries are walked in sorted order, tar headers
//! are written in deterministic mode, and the gzip header carries no
//! timestamp, so packaging unchanged sources twice yields identical bytes.

use super::asset_set::AssetDirectorySet;
use super::exclusion::ExclusionRules;
use super::naming::ArchiveName;
use super::packaging_error::PackagingError;
use super::version::VersionLabel;
use crate::output::{human_size, write_line};
use camino::{Utf8Path, Utf8PathBuf};
use flate2::{Compression, GzBuilder};
use log::{debug, trace};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the output directory under the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Input parameters for [`package_assets`].
#[derive(Debug, Clone)]
pub struct PackageParams {
    /// Repository root; archive paths are stored relative to it.
    pub repo_root: Utf8PathBuf,
    /// Directories to bundle, relative to `repo_root`.
    pub directories: AssetDirectorySet,
    /// File-name patterns left out of the archive.
    pub exclusions: ExclusionRules,
    /// Version label embedded in the archive filename.
    pub version: VersionLabel,
    /// Directory where the archive is written; created if absent.
    pub output_dir: Utf8PathBuf,
}

impl PackageParams {
    /// Parameters for the default asset set and exclusions, writing to
    /// `<repo_root>/dist`.
    ///
    /// # Errors
    ///
    /// Returns [`PackagingError::InvalidExclusion`] if the default exclusion
    /// patterns fail to compile.
    pub fn workshop_defaults(
        repo_root: Utf8PathBuf,
        version: VersionLabel,
    ) -> Result<Self, PackagingError> {
        let output_dir = repo_root.join(DEFAULT_OUTPUT_DIR);
        Ok(Self {
            repo_root,
            directories: AssetDirectorySet::default(),
            exclusions: ExclusionRules::workshop_defaults()?,
            version,
            output_dir,
        })
    }

    /// Return the path the archive will be written to.
    #[must_use]
    pub fn archive_path(&self) -> Utf8PathBuf {
        self.output_dir
            .join(ArchiveName::new(self.version.clone()).filename())
    }
}

/// Output produced by [`package_assets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutput {
    /// Path to the created `.tgz` archive.
    pub archive_path: Utf8PathBuf,
    /// Number of tar entries written (directories, files and links).
    pub entry_count: usize,
    /// Size of the archive in bytes.
    pub size_bytes: u64,
}

/// Whether an entry is stored as a directory header or from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory; stored as a header only.
    Directory,
    /// A regular file or symbolic link.
    File,
}

/// A single archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Location of the member on disk.
    pub source: PathBuf,
    /// Path stored in the archive, relative to the repository root.
    pub name: PathBuf,
    /// How the member is stored.
    pub kind: EntryKind,
}

/// Package the asset directory set into a `.tgz` archive.
///
/// Validates every asset directory before touching the filesystem, so a
/// missing directory never leaves a partial archive behind. Writes a
/// `Creating` line before packaging and a `Created` line with the archive's
/// size afterwards.
///
/// # Errors
///
/// Returns [`PackagingError::MissingAssetDirectory`] if any asset directory
/// is absent, [`PackagingError::OutputInsideAssets`] if the output directory
/// is beneath one, [`PackagingError::Walk`] if a directory cannot be traversed,
/// or [`PackagingError::Io`] if the archive cannot be written.
pub fn package_assets(
    params: &PackageParams,
    out: &mut dyn Write,
) -> Result<PackageOutput, PackagingError> {
    params.directories.validate(&params.repo_root)?;
    ensure_output_outside_assets(params)?;

    fs::create_dir_all(&params.output_dir)?;
    let archive_path = params.archive_path();
    let display_path = display_relative(&archive_path, &params.repo_root);
    write_line(out, format!("Creating {display_path}"));

    let entries = collect_entries(&params.repo_root, &params.directories, &params.exclusions)?;
    create_archive(archive_path.as_std_path(), &entries)?;

    let size_bytes = fs::metadata(&archive_path)?.len();
    debug!(
        "packaged {} entries into {archive_path} ({size_bytes} bytes)",
        entries.len()
    );
    write_line(
        out,
        format!("Created {display_path} ({})", human_size(size_bytes)),
    );

    Ok(PackageOutput {
        archive_path,
        entry_count: entries.len(),
        size_bytes,
    })
}

/// Collect archive members for every asset directory under `root`.
///
/// Each directory is walked in file-name order. Excluded names are pruned,
/// which also skips everything beneath an excluded directory. The asset
/// directory itself is always kept.
///
/// # Errors
///
/// Returns [`PackagingError::Walk`] if traversal fails.
pub fn collect_entries(
    root: &Utf8Path,
    directories: &AssetDirectorySet,
    exclusions: &ExclusionRules,
) -> Result<Vec<ArchiveEntry>, PackagingError> {
    let mut entries = Vec::new();
    for directory in directories.directories() {
        let walker = WalkDir::new(root.join(directory))
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !exclusions.is_excluded(e.file_name()));

        for walked in walker {
            let walked = walked?;
            let name = relative_name(walked.path(), root.as_std_path())?;
            let kind = if walked.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            trace!("collect_entries: {}", name.display());
            entries.push(ArchiveEntry {
                source: walked.into_path(),
                name,
                kind,
            });
        }
    }
    Ok(entries)
}

/// Write `entries` to a deterministic gzip-compressed tar at `output_path`.
///
/// An existing file at `output_path` is overwritten.
///
/// # Errors
///
/// Returns [`PackagingError::Io`] if any source cannot be read or the
/// output cannot be written.
pub fn create_archive(output_path: &Path, entries: &[ArchiveEntry]) -> Result<(), PackagingError> {
    let output_file = fs::File::create(output_path)?;
    let encoder = GzBuilder::new()
        .mtime(0)
        .write(output_file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive.mode(tar::HeaderMode::Deterministic);
    archive.follow_symlinks(false);

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => archive.append_dir(&entry.name, &entry.source)?,
            EntryKind::File => archive.append_path_with_name(&entry.source, &entry.name)?,
        }
    }

    let encoder = archive.into_inner()?;
    encoder.finish()?;
    Ok(())
}

fn ensure_output_outside_assets(params: &PackageParams) -> Result<(), PackagingError> {
    let output_dir = normalise(&params.output_dir);
    for directory in params.directories.directories() {
        if output_dir.starts_with(normalise(&params.repo_root.join(directory))) {
            return Err(PackagingError::OutputInsideAssets {
                output_dir: params.output_dir.clone(),
                directory: directory.clone(),
            });
        }
    }
    Ok(())
}

/// Resolve `.` and `..` lexically; symlinks are not followed.
fn normalise(path: &Utf8Path) -> Utf8PathBuf {
    let mut resolved = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            camino::Utf8Component::CurDir => {}
            camino::Utf8Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

fn relative_name(path: &Path, root: &Path) -> Result<PathBuf, PackagingError> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|e| {
            PackagingError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{} is outside {}: {e}", path.display(), root.display()),
            ))
        })
}

fn display_relative<'a>(path: &'a Utf8Path, root: &Utf8Path) -> &'a Utf8Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
#[path = "packaging_tests.rs"]
mod tests;
