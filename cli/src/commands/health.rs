//! `redeploy health` — poll the health endpoint of a running deployment.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::PipelineRunner;
use crate::application::services::health_poll::poll_health;
use crate::domain::health::HEALTH_POLL_INTERVAL;
use crate::domain::pipeline::HEALTH_POLL;
use crate::domain::ExitCode;
use crate::output::TerminalReporter;

/// Run the health command.
///
/// # Errors
///
/// Never fails on its own; an unhealthy endpoint maps to exit 1.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let reporter = TerminalReporter::new(&app.output);
    let probe = &app.http;
    let config = &app.config;

    let result = PipelineRunner::new(&reporter)
        .run_step(HEALTH_POLL, move || async move {
            let verdict = poll_health(
                probe,
                &config.health_url,
                config.health_timeout(),
                HEALTH_POLL_INTERVAL,
            )
            .await;
            Ok::<_, anyhow::Error>(verdict.is_healthy())
        })
        .await;
    Ok(super::finish(
        app,
        result,
        &format!("{} is healthy", config.health_url),
    ))
}
