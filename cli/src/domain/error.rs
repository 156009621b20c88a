//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Precondition errors ──────────────────────────────────────────────────────

/// Host is not ready for a deployment.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("Compose CLI not found at {}. Please install docker-compose first!", .0.display())]
    ComposeExeMissing(PathBuf),

    #[error("{file} wasn't found in {}", dir.display())]
    ComposeFileMissing { file: String, dir: PathBuf },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\nExpected an http:// or https:// URL")]
    InvalidUrl { key: String, value: String },

    #[error("archive URL has no file name: {0}")]
    NoFileName(String),

    #[error("Invalid compose_file '{0}': must be a file name inside work_dir")]
    InvalidComposeFile(String),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}
