//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. Every child runs in the configured working
//! directory so the compose CLI picks up the descriptor found there.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::{ChildOutput, CommandRunner};

/// Production `CommandRunner` — spawns with tokio and waits for exit.
///
/// No timeout: builds and launches may legitimately run for a long time, and
/// the only cancellation is killing the orchestrator itself.
pub struct TokioCommandRunner {
    work_dir: PathBuf,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }
}

fn stdio_for(output: ChildOutput) -> Stdio {
    match output {
        ChildOutput::Inherit => Stdio::inherit(),
        ChildOutput::Discard => Stdio::null(),
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &Path,
        args: &[&str],
        output: ChildOutput,
    ) -> Result<ExitStatus> {
        tracing::debug!(program = %program.display(), ?args, ?output, "spawning");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(&self.work_dir)
            .stdout(stdio_for(output))
            .stderr(stdio_for(output))
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {}", program.display()))
    }
}
