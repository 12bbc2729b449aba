//! Workshop asset bundling and retrieval.
//!
//! The workshop's demo data (article snapshots, embeddings and compiled wasm
//! functions) is too large for git, so it travels as a `.tgz` attached to a
//! GitHub release. This crate provides both halves of that hand-off and is
//! used by the `workshop-package-assets` and `workshop-fetch-assets`
//! binaries.
//!
//! # Modules
//!
//! - [`artefact`] - Archive naming, packaging, download and extraction
//! - [`cli`] - Command-line argument definitions for both binaries
//! - [`config`] - Fixed release constants and CLI-to-domain resolution
//! - [`fetch`] - Download-and-extract orchestration
//! - [`output`] - Progress line and size formatting helpers
//! - [`repository`] - Repository root discovery

pub mod artefact;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod output;
pub mod repository;
