//! Application service — the full deploy use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::pipeline::PipelineRunner;
use crate::application::ports::{
    ArchiveExtractor, CommandRunner, Downloader, HealthProbe, LocalFs, ProgressReporter,
};
use crate::application::services::{
    asset_sync::sync_assets,
    compose::{build, launch, teardown},
    health_poll::poll_health,
    preconditions::check_preconditions,
};
use crate::domain::health::HEALTH_POLL_INTERVAL;
use crate::domain::pipeline::{ASSET_SYNC, BUILD, HEALTH_POLL, LAUNCH, PRECONDITIONS, TEARDOWN};
use crate::domain::{DeployConfig, DeployOutcome, Halt};

/// Infrastructure the deploy pipeline runs against.
pub struct DeployPorts<'a, C, F, D, X, H> {
    pub runner: &'a C,
    pub fs: &'a F,
    pub downloader: &'a D,
    pub extractor: &'a X,
    pub probe: &'a H,
}

/// Run precondition check, teardown, asset sync, build, launch and health
/// poll, in that order, stopping at the first step that does not succeed.
///
/// Never returns an error: every failure is folded into
/// [`DeployOutcome::Halted`], whose exit code tells the caller how it ended.
pub async fn deploy<C, F, D, X, H>(
    ports: DeployPorts<'_, C, F, D, X, H>,
    config: &DeployConfig,
    reporter: &impl ProgressReporter,
) -> DeployOutcome
where
    C: CommandRunner,
    F: LocalFs,
    D: Downloader,
    X: ArchiveExtractor,
    H: HealthProbe,
{
    match run_pipeline(ports, config, reporter).await {
        Ok(()) => {
            tracing::info!("deployment finished");
            DeployOutcome::Deployed
        }
        Err(halt) => DeployOutcome::Halted(halt),
    }
}

async fn run_pipeline<C, F, D, X, H>(
    ports: DeployPorts<'_, C, F, D, X, H>,
    config: &DeployConfig,
    reporter: &impl ProgressReporter,
) -> Result<(), Halt>
where
    C: CommandRunner,
    F: LocalFs,
    D: Downloader,
    X: ArchiveExtractor,
    H: HealthProbe,
{
    let DeployPorts {
        runner,
        fs,
        downloader,
        extractor,
        probe,
    } = ports;
    let exe = config.compose_exe.as_path();
    let pipeline = PipelineRunner::new(reporter);

    pipeline
        .run_step(PRECONDITIONS, move || async move { check_preconditions(fs, config) })
        .await?;
    pipeline
        .run_step(TEARDOWN, move || teardown(runner, exe))
        .await?;
    pipeline
        .run_step(ASSET_SYNC, move || {
            sync_assets(fs, downloader, extractor, config)
        })
        .await?;
    pipeline.run_step(BUILD, move || build(runner, exe)).await?;
    pipeline.run_step(LAUNCH, move || launch(runner, exe)).await?;
    pipeline
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
        .await
}
