//! Fixed release constants and resolution of CLI values into configuration.
//!
//! Environment variables are read by `clap` at the CLI edge; everything here
//! turns those raw values into validated domain types so library code never
//! consults the environment.

use crate::artefact::error::VersionError;
use crate::artefact::packaging::PackageParams;
use crate::artefact::packaging_error::PackagingError;
use crate::artefact::release::ReleaseReference;
use crate::artefact::version::VersionLabel;
use crate::cli::{FetchCli, PackageCli};
use crate::fetch::FetchConfig;
use camino::{Utf8Path, Utf8PathBuf};

/// GitHub owner of the release repository.
pub const RELEASE_OWNER: &str = "momentohq";

/// GitHub repository the asset archives are attached to.
pub const RELEASE_REPO: &str = "momento-buffconf-workshop-internal";

/// Asset version fetched when none is requested.
pub const DEFAULT_ASSET_VERSION: &str = "20250725";

/// Parent of the default fetch destination (the dev-container workspace
/// mount).
const DEFAULT_DEST_PARENT: &str = "/workspaces";

/// Return the default fetch destination, `/workspaces/<repo>`.
#[must_use]
pub fn default_dest() -> Utf8PathBuf {
    Utf8Path::new(DEFAULT_DEST_PARENT).join(RELEASE_REPO)
}

/// Resolve fetcher CLI values into a [`FetchConfig`].
///
/// # Errors
///
/// Returns a [`VersionError`] if the requested asset version is not a valid
/// label.
pub fn fetch_config(cli: &FetchCli) -> Result<FetchConfig, VersionError> {
    let version = non_empty(Some(cli.asset_version.as_str())).unwrap_or(DEFAULT_ASSET_VERSION);
    let version = VersionLabel::try_from(version)?;
    let dest = cli
        .dest
        .clone()
        .filter(|dest| !dest.as_str().is_empty())
        .unwrap_or_else(default_dest);
    Ok(FetchConfig {
        reference: ReleaseReference::new(RELEASE_OWNER, RELEASE_REPO, version),
        dest,
    })
}

/// Errors resolving archiver CLI values.
#[derive(Debug, thiserror::Error)]
pub enum PackageConfigError {
    /// The version label is invalid.
    #[error("{0}")]
    Version(#[from] VersionError),

    /// The default packaging parameters could not be built.
    #[error("{0}")]
    Packaging(#[from] PackagingError),
}

/// Resolve archiver CLI values into [`PackageParams`] for `repo_root`.
///
/// # Errors
///
/// Returns [`PackageConfigError::Version`] for an invalid label and
/// [`PackageConfigError::Packaging`] if the default exclusions fail to
/// compile.
pub fn package_params(
    cli: &PackageCli,
    repo_root: Utf8PathBuf,
) -> Result<PackageParams, PackageConfigError> {
    let version = VersionLabel::resolve(non_empty(cli.label.as_deref()))?;
    let mut params = PackageParams::workshop_defaults(repo_root, version)?;
    if let Some(dir) = &cli.output_dir {
        params.output_dir = if dir.is_absolute() {
            dir.clone()
        } else {
            params.repo_root.join(dir)
        };
    }
    Ok(params)
}

/// Treat an empty value the way `${VAR:-default}` does.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
