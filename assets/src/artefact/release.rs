//! Release reference and download URL construction.
//!
//! A [`ReleaseReference`] pins an (owner, repo, tag) triple on GitHub. The
//! archive for a version is published as a release asset, so its URL follows
//! the releases-by-tag convention:
//! `https://github.com/<owner>/<repo>/releases/download/<tag>/<file>`.

use super::naming::{ArchiveName, ReleaseTag};
use super::version::VersionLabel;

/// Base URL of the release host.
const RELEASE_HOST: &str = "https://github.com";

/// Identifies the release an asset archive is published under.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::release::ReleaseReference;
/// use workshop_assets::artefact::version::VersionLabel;
///
/// let version: VersionLabel = "20250725".try_into().expect("valid label");
/// let reference = ReleaseReference::new("octo", "demo", version);
/// assert_eq!(
///     reference.download_url(),
///     "https://github.com/octo/demo/releases/download/assets-20250725/workshop-assets-20250725.tgz"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReference {
    owner: String,
    repo: String,
    version: VersionLabel,
}

impl ReleaseReference {
    /// Create a reference to the release of `version` in `owner/repo`.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, version: VersionLabel) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            version,
        }
    }

    /// Return the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Return the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Return the release tag (`assets-<version>`).
    #[must_use]
    pub fn tag(&self) -> ReleaseTag {
        ReleaseTag::new(self.version.clone())
    }

    /// Return the archive name published under this release.
    #[must_use]
    pub fn archive_name(&self) -> ArchiveName {
        ArchiveName::new(self.version.clone())
    }

    /// Return the full download URL of the archive.
    #[must_use]
    pub fn download_url(&self) -> String {
        format!(
            "{RELEASE_HOST}/{}/{}/releases/download/{}/{}",
            self.owner,
            self.repo,
            self.tag(),
            self.archive_name()
        )
    }
}
