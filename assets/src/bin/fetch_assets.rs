//! Fetch binary for workshop asset releases.
//!
//! Thin CLI wrapper around [`workshop_assets::fetch`], run during
//! dev-container bootstrap to pull the published data assets into the
//! checkout.

use clap::Parser;
use std::io::Write;
use thiserror::Error;
use workshop_assets::artefact::error::VersionError;
use workshop_assets::cli::FetchCli;
use workshop_assets::config::fetch_config;
use workshop_assets::fetch::{FetchError, fetch_assets};
use workshop_assets::output::init_logging;

/// Errors returned by the fetch CLI.
#[derive(Debug, Error)]
enum FetchCliError {
    /// The requested asset version is not a valid label.
    #[error("{0}")]
    Version(#[from] VersionError),

    /// Download or extraction failed.
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

fn main() {
    init_logging();
    let cli = FetchCli::parse();
    let mut stdout = std::io::stdout();
    if let Err(err) = run(&cli, &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Resolve configuration and fetch the archive.
fn run(cli: &FetchCli, out: &mut dyn Write) -> Result<(), FetchCliError> {
    let config = fetch_config(cli)?;
    fetch_assets(&config, out)?;
    Ok(())
}
