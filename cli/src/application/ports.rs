//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{DeployConfig, ProbeResult, Step};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Where a child process's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutput {
    /// Share the orchestrator's terminal (live output).
    Inherit,
    /// Send both streams to the null device.
    Discard,
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and return its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    /// A non-zero exit is NOT an error.
    async fn run_status(
        &self,
        program: &Path,
        args: &[&str],
        output: ChildOutput,
    ) -> Result<ExitStatus>;
}

// ── HTTP Ports ────────────────────────────────────────────────────────────────

/// Abstracts the health endpoint probe so the poll loop can be tested
/// without a real server.
#[allow(async_fn_in_trait)]
pub trait HealthProbe {
    /// Issue one GET and report the status or the connection failure.
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Abstracts fetching the asset archive.
#[allow(async_fn_in_trait)]
pub trait Downloader {
    /// Download `url` to `dest`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, any non-2xx status, or a
    /// filesystem write failure.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

// ── Archive Port ──────────────────────────────────────────────────────────────

/// Abstracts tarball extraction.
#[allow(async_fn_in_trait)]
pub trait ArchiveExtractor {
    /// Unpack every entry of `archive` into `dest`, returning the entry count.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive is malformed or an entry cannot be
    /// written.
    async fn extract(&self, archive: &Path, dest: &Path) -> Result<u64>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the handful of local filesystem operations the pipeline needs.
pub trait LocalFs {
    /// `true` if `path` exists and is a regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;
    /// Names of the entries directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>>;
    /// Create `path` and all missing parents; no-op if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Delete a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so the pipeline can emit per-step status
/// without depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// A step is about to run.
    fn step_started(&self, step: &Step);
    /// A step finished; `ok` is `false` for both negative results and errors.
    fn step_finished(&self, step: &Step, ok: bool);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the deployment configuration file.
pub trait ConfigStore {
    /// Load the config file, falling back to defaults when the default path
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// explicitly requested file is missing.
    fn load(&self) -> Result<DeployConfig>;
    /// The path `load` reads from.
    ///
    /// # Errors
    ///
    /// Returns an error if no path can be determined (no home directory).
    fn path(&self) -> Result<PathBuf>;
}
