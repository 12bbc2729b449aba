//! Archive naming policy for workshop asset releases.
//!
//! Archives are named `workshop-assets-<version>.tgz` and published under the
//! release tag `assets-<version>`. Both are derived from a single
//! [`VersionLabel`], which is the only coupling between the archiver and the
//! fetcher.

use super::version::VersionLabel;
use std::fmt;

/// The fixed prefix for all archive filenames.
const ARCHIVE_PREFIX: &str = "workshop-assets";

/// The fixed file extension for archives.
const ARCHIVE_EXTENSION: &str = ".tgz";

/// The fixed prefix for release tags.
const TAG_PREFIX: &str = "assets";

/// The filename of an asset archive for a given version.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::naming::ArchiveName;
/// use workshop_assets::artefact::version::VersionLabel;
///
/// let version: VersionLabel = "v0.3".try_into().expect("valid label");
/// assert_eq!(ArchiveName::new(version).to_string(), "workshop-assets-v0.3.tgz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    version: VersionLabel,
}

impl ArchiveName {
    /// Create an archive name for `version`.
    #[must_use]
    pub fn new(version: VersionLabel) -> Self {
        Self { version }
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &VersionLabel {
        &self.version
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ARCHIVE_PREFIX}-{}{ARCHIVE_EXTENSION}", self.version)
    }
}

/// The release tag an archive is published under.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::naming::ReleaseTag;
/// use workshop_assets::artefact::version::VersionLabel;
///
/// let version: VersionLabel = "20250725".try_into().expect("valid label");
/// assert_eq!(ReleaseTag::new(version).to_string(), "assets-20250725");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    version: VersionLabel,
}

impl ReleaseTag {
    /// Create a release tag for `version`.
    #[must_use]
    pub fn new(version: VersionLabel) -> Self {
        Self { version }
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &VersionLabel {
        &self.version
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG_PREFIX}-{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn version() -> VersionLabel {
        VersionLabel::try_from("20250725").expect("valid label")
    }

    #[rstest]
    fn archive_name_matches_convention(version: VersionLabel) {
        assert_eq!(
            ArchiveName::new(version).to_string(),
            "workshop-assets-20250725.tgz"
        );
    }

    #[rstest]
    fn filename_matches_display(version: VersionLabel) {
        let name = ArchiveName::new(version);
        assert_eq!(name.filename(), name.to_string());
    }

    #[rstest]
    fn tag_matches_convention(version: VersionLabel) {
        assert_eq!(ReleaseTag::new(version).to_string(), "assets-20250725");
    }

    #[rstest]
    fn name_and_tag_share_the_version(version: VersionLabel) {
        let name = ArchiveName::new(version.clone());
        let tag = ReleaseTag::new(version);
        assert_eq!(name.version(), tag.version());
    }
}
