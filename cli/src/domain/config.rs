//! Domain types and validators for deployment configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_ARCHIVE_URL: &str =
    "https://s3.eu-central-1.amazonaws.com/devops-exercise/pandapics.tar.gz";
pub const DEFAULT_DEPLOY_DIR: &str = "/public/images";
pub const DEFAULT_COMPOSE_EXE: &str = "/usr/local/bin/docker-compose";
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:3000/health";
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 15;

// ── Config schema ────────────────────────────────────────────────────────────

/// Everything a deployment run needs, fixed at startup.
///
/// Stored as YAML in `~/.redeploy/config.yaml`; every field is optional in the
/// file and falls back to the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Gzip tarball holding the static assets.
    pub archive_url: String,
    /// Directory the archive is extracted into.
    pub deploy_dir: PathBuf,
    /// Path to the compose CLI executable.
    pub compose_exe: PathBuf,
    /// Compose descriptor file name expected in `work_dir`.
    pub compose_file: String,
    /// Directory holding the compose descriptor; the compose CLI runs here.
    pub work_dir: PathBuf,
    /// Endpoint polled after launch.
    pub health_url: String,
    /// How long to wait for the health endpoint, in seconds.
    pub health_timeout_secs: u64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            deploy_dir: PathBuf::from(DEFAULT_DEPLOY_DIR),
            compose_exe: PathBuf::from(DEFAULT_COMPOSE_EXE),
            compose_file: DEFAULT_COMPOSE_FILE.to_string(),
            work_dir: PathBuf::from("."),
            health_url: DEFAULT_HEALTH_URL.to_string(),
            health_timeout_secs: DEFAULT_HEALTH_TIMEOUT_SECS,
        }
    }
}

impl DeployConfig {
    /// Health poll deadline as a `Duration`.
    #[must_use]
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Where the downloaded archive is written before extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if `archive_url` has no file name.
    pub fn archive_path(&self) -> Result<PathBuf> {
        Ok(self.deploy_dir.join(archive_file_name(&self.archive_url)?))
    }

    /// Path of the compose descriptor inside `work_dir`.
    #[must_use]
    pub fn compose_path(&self) -> PathBuf {
        self.work_dir.join(&self.compose_file)
    }

    /// Check every field that can be checked without touching the system.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        validate_http_url("archive_url", &self.archive_url)?;
        validate_http_url("health_url", &self.health_url)?;
        archive_file_name(&self.archive_url)?;
        validate_compose_file(&self.compose_file)?;
        Ok(())
    }
}

// ── Overrides ────────────────────────────────────────────────────────────────

/// Per-field values supplied on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub archive_url: Option<String>,
    pub deploy_dir: Option<PathBuf>,
    pub compose_exe: Option<PathBuf>,
    pub compose_file: Option<String>,
    pub work_dir: Option<PathBuf>,
    pub health_url: Option<String>,
    pub health_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Replace every field of `config` for which an override is set.
    pub fn apply(self, config: &mut DeployConfig) {
        if let Some(v) = self.archive_url {
            config.archive_url = v;
        }
        if let Some(v) = self.deploy_dir {
            config.deploy_dir = v;
        }
        if let Some(v) = self.compose_exe {
            config.compose_exe = v;
        }
        if let Some(v) = self.compose_file {
            config.compose_file = v;
        }
        if let Some(v) = self.work_dir {
            config.work_dir = v;
        }
        if let Some(v) = self.health_url {
            config.health_url = v;
        }
        if let Some(v) = self.health_timeout_secs {
            config.health_timeout_secs = v;
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Extract the file name from the last path segment of a URL.
///
/// Query strings and fragments are ignored, so
/// `https://host/a/assets.tar.gz?sig=1` yields `assets.tar.gz`.
///
/// # Errors
///
/// Returns [`ConfigError::NoFileName`] if the URL path ends in `/` or has no
/// path at all.
pub fn archive_file_name(url: &str) -> Result<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    let path = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);

    match path.split_once('/') {
        Some((_, tail)) => match tail.rsplit('/').next() {
            Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name.to_string()),
            _ => Err(ConfigError::NoFileName(url.to_string()).into()),
        },
        None => Err(ConfigError::NoFileName(url.to_string()).into()),
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::InvalidUrl {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into())
}

fn validate_compose_file(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(ConfigError::InvalidComposeFile(name.to_string()).into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
