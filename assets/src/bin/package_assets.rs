//! Packaging binary for workshop asset releases.
//!
//! Thin CLI wrapper around [`workshop_assets::artefact::packaging`] that the
//! Makefile `package-assets` target invokes. Run it from anywhere inside the
//! repository; the archive lands in `dist/` at the repository root and is
//! then uploaded by hand to the `assets-<version>` release.

use clap::Parser;
use std::io::Write;
use thiserror::Error;
use workshop_assets::artefact::packaging::package_assets;
use workshop_assets::artefact::packaging_error::PackagingError;
use workshop_assets::cli::PackageCli;
use workshop_assets::config::{PackageConfigError, package_params};
use workshop_assets::output::init_logging;
use workshop_assets::repository::current_repository_root;

/// Errors returned by the packaging CLI.
#[derive(Debug, Error)]
enum PackageCliError {
    /// The label or default parameters were invalid.
    #[error("{0}")]
    Config(#[from] PackageConfigError),

    /// Repository discovery, validation or archive creation failed.
    #[error("{0}")]
    Packaging(#[from] PackagingError),
}

fn main() {
    init_logging();
    let cli = PackageCli::parse();
    let mut stdout = std::io::stdout();
    if let Err(err) = run(&cli, &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Locate the repository, resolve parameters and package the assets.
fn run(cli: &PackageCli, out: &mut dyn Write) -> Result<(), PackageCliError> {
    let repo_root = current_repository_root()?;
    let params = package_params(cli, repo_root)?;
    package_assets(&params, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn missing_directory_message_names_the_path() {
        let err = PackageCliError::from(PackagingError::MissingAssetDirectory {
            path: Utf8PathBuf::from("data/embeddings"),
        });
        assert_eq!(err.to_string(), "missing asset directory: data/embeddings");
    }

    #[test]
    fn not_in_repository_message_names_the_start() {
        let err = PackageCliError::from(PackagingError::NotInRepository {
            start: Utf8PathBuf::from("/tmp/loose"),
        });
        assert!(err.to_string().contains("not inside a git repository"));
        assert!(err.to_string().contains("/tmp/loose"));
    }
}
