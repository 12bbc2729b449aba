//! CLI argument definitions for the asset binaries.
//!
//! Both tools take no positional arguments. Options also read environment
//! variables so the tools can be driven from a Makefile or a dev-container
//! bootstrap script. Empty values are treated as unset by
//! [`crate::config`].

use crate::config::DEFAULT_ASSET_VERSION;
use camino::Utf8PathBuf;
use clap::Parser;

/// Bundle the workshop's data directories into a release archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "workshop-package-assets")]
#[command(version, about)]
#[command(after_help = concat!(
    "BUNDLED DIRECTORIES:\n",
    "  data/content/raw\n",
    "  data/content/normalized\n",
    "  data/embeddings\n",
    "  data/wasm\n\n",
    "EXAMPLES:\n",
    "  Package today's snapshot into dist/workshop-assets-<YYYYMMDD>.tgz:\n",
    "    $ workshop-package-assets\n\n",
    "  Package with an explicit label:\n",
    "    $ VERSION=v0.3 workshop-package-assets",
))]
pub struct PackageCli {
    /// Version label for the archive [default: today's date as YYYYMMDD].
    #[arg(long, env = "VERSION", value_name = "LABEL")]
    pub label: Option<String>,

    /// Directory for the archive, relative to the repository root
    /// [default: dist].
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,
}

/// Download a published asset archive and extract it.
#[derive(Parser, Debug, Clone)]
#[command(name = "workshop-fetch-assets")]
#[command(version, about)]
pub struct FetchCli {
    /// Asset version to fetch; selects the `assets-<version>` release.
    #[arg(long, env = "ASSET_VERSION", value_name = "VERSION", default_value = DEFAULT_ASSET_VERSION)]
    pub asset_version: String,

    /// Directory to extract into
    /// [default: /workspaces/momento-buffconf-workshop-internal].
    #[arg(long, env = "DEST", value_name = "DIR")]
    pub dest: Option<Utf8PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
