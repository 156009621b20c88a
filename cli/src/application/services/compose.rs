//! Application service — compose CLI invocations (teardown, build, launch).
//!
//! Each use-case maps the CLI's exit status to a boolean: zero is success,
//! anything else is a handled failure. Only spawn/wait failures are errors.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{ChildOutput, CommandRunner};

/// Run `<exe> <args...>` and report whether it exited with status zero.
async fn run_compose(
    runner: &impl CommandRunner,
    exe: &Path,
    args: &[&str],
    output: ChildOutput,
) -> Result<bool> {
    let status = runner.run_status(exe, args, output).await?;
    if status.success() {
        tracing::debug!(?args, "compose command succeeded");
    } else {
        tracing::warn!(?args, code = ?status.code(), "compose command exited non-zero");
    }
    Ok(status.success())
}

/// Stop and remove any previous deployment (`down`), output discarded.
///
/// # Errors
///
/// Returns an error if the compose CLI cannot be run.
pub async fn teardown(runner: &impl CommandRunner, exe: &Path) -> Result<bool> {
    run_compose(runner, exe, &["down"], ChildOutput::Discard).await
}

/// Build images, pulling the latest base layers (`build --pull`).
///
/// Output goes to the operator's terminal because builds are long-running.
///
/// # Errors
///
/// Returns an error if the compose CLI cannot be run.
pub async fn build(runner: &impl CommandRunner, exe: &Path) -> Result<bool> {
    run_compose(runner, exe, &["build", "--pull"], ChildOutput::Inherit).await
}

/// Start the deployment detached (`up -d`), output discarded.
///
/// # Errors
///
/// Returns an error if the compose CLI cannot be run.
pub async fn launch(runner: &impl CommandRunner, exe: &Path) -> Result<bool> {
    run_compose(runner, exe, &["up", "-d"], ChildOutput::Discard).await
}
