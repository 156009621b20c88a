//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` after the configuration has been loaded,
//! so every handler sees the same effective `DeployConfig` and the same
//! infrastructure adapters.

use anyhow::Result;

use crate::application::services::config_service;
use crate::application::services::deploy::DeployPorts;
use crate::domain::{ConfigOverrides, DeployConfig};
use crate::infra::archive::TarArchive;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::StdFs;
use crate::infra::http::UreqHttp;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Configuration file store (explicit `--config` path or the default).
    pub config_store: YamlConfigStore,
    /// Per-field overrides from the command line.
    pub overrides: ConfigOverrides,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective, validated configuration.
    pub config: DeployConfig,
    /// Where the configuration file was looked up.
    pub config_store: YamlConfigStore,
    /// Compose CLI runner, rooted at `config.work_dir`.
    pub runner: TokioCommandRunner,
    /// HTTP client for the archive download and the health probe.
    pub http: UreqHttp,
    /// Tarball extractor.
    pub archive: TarArchive,
    /// Local filesystem.
    pub fs: StdFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// effective configuration is invalid.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let AppFlags {
            output,
            config_store,
            overrides,
        } = flags;
        let config = config_service::load_config(&config_store, overrides)?;

        Ok(Self {
            output: OutputContext::new(output.no_color, output.quiet),
            runner: TokioCommandRunner::new(config.work_dir.clone()),
            http: UreqHttp::new(),
            archive: TarArchive,
            fs: StdFs,
            config,
            config_store,
        })
    }

    /// Borrow the infrastructure adapters the deploy pipeline runs against.
    #[must_use]
    pub fn deploy_ports(
        &self,
    ) -> DeployPorts<'_, TokioCommandRunner, StdFs, UreqHttp, TarArchive, UreqHttp> {
        DeployPorts {
            runner: &self.runner,
            fs: &self.fs,
            downloader: &self.http,
            extractor: &self.archive,
            probe: &self.http,
        }
    }
}
