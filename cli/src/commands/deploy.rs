//! `redeploy deploy` — run the whole pipeline.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::deploy::deploy;
use crate::domain::{DeployOutcome, ExitCode};
use crate::output::TerminalReporter;

/// Run the deploy command.
///
/// # Errors
///
/// Never fails on its own; every pipeline failure is folded into the
/// returned exit code.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let config = &app.config;
    app.output.banner(&format!(
        "Deploying {} from {}",
        config.compose_file,
        config.work_dir.display()
    ));

    let reporter = TerminalReporter::new(&app.output);
    let outcome = deploy(app.deploy_ports(), config, &reporter).await;
    let result = match outcome {
        DeployOutcome::Deployed => Ok(()),
        DeployOutcome::Halted(halt) => Err(halt),
    };
    Ok(super::finish(
        app,
        result,
        &format!("Deployed; {} is healthy", config.health_url),
    ))
}
