//! Application service — precondition check use-case.

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;
use crate::domain::{DeployConfig, PreconditionError};

/// Verify the compose CLI binary and the compose descriptor are present.
///
/// Never returns `Ok(false)`: a missing prerequisite is an error, so the
/// pipeline halts on the unexpected-failure path.
///
/// # Errors
///
/// Returns [`PreconditionError`] if either prerequisite is missing, or an
/// I/O error if `work_dir` cannot be listed.
pub fn check_preconditions(fs: &impl LocalFs, config: &DeployConfig) -> Result<bool> {
    if !fs.is_file(&config.compose_exe) {
        return Err(PreconditionError::ComposeExeMissing(config.compose_exe.clone()).into());
    }

    let entries = fs
        .list_dir(&config.work_dir)
        .with_context(|| format!("listing {}", config.work_dir.display()))?;
    if !entries.iter().any(|name| *name == config.compose_file) {
        return Err(PreconditionError::ComposeFileMissing {
            file: config.compose_file.clone(),
            dir: config.work_dir.clone(),
        }
        .into());
    }

    tracing::debug!(
        compose_exe = %config.compose_exe.display(),
        compose_file = %config.compose_path().display(),
        "preconditions satisfied"
    );
    Ok(true)
}
