//! The ordered set of directories bundled into an asset archive.
//!
//! The notebooks read scraped articles, their normalized form, embedding
//! parquet files and compiled wasm functions from fixed locations under
//! `data/`. Every one of those directories must be present before an archive
//! is written.

use super::packaging_error::PackagingError;
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;

/// Asset directories bundled by default, relative to the repository root.
pub const DEFAULT_ASSET_DIRECTORIES: [&str; 4] = [
    "data/content/raw",
    "data/content/normalized",
    "data/embeddings",
    "data/wasm",
];

/// An ordered sequence of directories relative to the repository root.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::asset_set::AssetDirectorySet;
///
/// let set = AssetDirectorySet::default();
/// assert_eq!(set.directories()[0].as_str(), "data/content/raw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectorySet {
    directories: Vec<Utf8PathBuf>,
}

impl AssetDirectorySet {
    /// Create a set from relative directory paths, preserving order.
    #[must_use]
    pub fn new<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the directories in archive order.
    #[must_use]
    pub fn directories(&self) -> &[Utf8PathBuf] {
        &self.directories
    }

    /// Check that every directory exists under `root`.
    ///
    /// Stops at the first absent entry so the error names exactly one path.
    ///
    /// # Errors
    ///
    /// Returns [`PackagingError::MissingAssetDirectory`] for the first entry
    /// that does not exist or is not a directory.
    pub fn validate(&self, root: &Utf8Path) -> Result<(), PackagingError> {
        for directory in &self.directories {
            let absolute = root.join(directory);
            trace!("validate: checking {absolute}");
            if !absolute.is_dir() {
                return Err(PackagingError::MissingAssetDirectory {
                    path: directory.clone(),
                });
            }
        }
        Ok(())
    }

    /// Return every directory that is absent under `root`.
    #[must_use]
    pub fn missing_under(&self, root: &Utf8Path) -> Vec<&Utf8Path> {
        self.directories
            .iter()
            .filter(|directory| !root.join(directory).is_dir())
            .map(Utf8PathBuf::as_path)
            .collect()
    }
}

impl Default for AssetDirectorySet {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIRECTORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn root() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    fn utf8(dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).expect("utf-8 temp path")
    }

    fn create_all(root: &Utf8Path) {
        for directory in DEFAULT_ASSET_DIRECTORIES {
            std::fs::create_dir_all(root.join(directory)).expect("mkdir");
        }
    }

    #[test]
    fn default_set_preserves_order() {
        let set = AssetDirectorySet::default();
        let names: Vec<&str> = set.directories().iter().map(|d| d.as_str()).collect();
        assert_eq!(names, DEFAULT_ASSET_DIRECTORIES);
    }

    #[rstest]
    fn validate_accepts_complete_tree(root: TempDir) {
        create_all(utf8(&root));
        assert!(AssetDirectorySet::default().validate(utf8(&root)).is_ok());
    }

    #[rstest]
    fn validate_names_first_missing_directory(root: TempDir) {
        let base = utf8(&root);
        std::fs::create_dir_all(base.join("data/content/raw")).expect("mkdir");
        std::fs::create_dir_all(base.join("data/wasm")).expect("mkdir");

        let err = AssetDirectorySet::default()
            .validate(base)
            .expect_err("normalized is missing");
        assert!(
            matches!(err, PackagingError::MissingAssetDirectory { ref path } if path == "data/content/normalized"),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn validate_rejects_file_in_place_of_directory(root: TempDir) {
        let base = utf8(&root);
        create_all(base);
        std::fs::remove_dir(base.join("data/wasm")).expect("rmdir");
        std::fs::write(base.join("data/wasm"), b"not a dir").expect("write");

        let err = AssetDirectorySet::default()
            .validate(base)
            .expect_err("wasm is a file");
        assert!(err.to_string().contains("data/wasm"));
    }

    #[rstest]
    fn missing_under_lists_every_gap(root: TempDir) {
        let base = utf8(&root);
        std::fs::create_dir_all(base.join("data/embeddings")).expect("mkdir");

        let set = AssetDirectorySet::default();
        let missing: Vec<&str> = set.missing_under(base).into_iter().map(Utf8Path::as_str).collect();
        assert_eq!(
            missing,
            ["data/content/raw", "data/content/normalized", "data/wasm"]
        );
    }

    #[test]
    fn empty_set_always_validates() {
        let set = AssetDirectorySet::new(Vec::<Utf8PathBuf>::new());
        assert!(set.validate(Utf8Path::new("/nonexistent")).is_ok());
    }
}
