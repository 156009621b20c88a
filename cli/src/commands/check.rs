//! `redeploy check` — verify the compose CLI and descriptor are in place.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::PipelineRunner;
use crate::application::services::preconditions::check_preconditions;
use crate::domain::ExitCode;
use crate::domain::pipeline::PRECONDITIONS;
use crate::output::TerminalReporter;

/// Run the check command.
///
/// # Errors
///
/// Never fails on its own; a missing file is reported and mapped to exit 2.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let reporter = TerminalReporter::new(&app.output);
    let fs = &app.fs;
    let config = &app.config;
    let result = PipelineRunner::new(&reporter)
        .run_step(PRECONDITIONS, move || async move {
            check_preconditions(fs, config)
        })
        .await;
    Ok(super::finish(app, result, "Ready to deploy"))
}
