//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::domain::{ConfigOverrides, ExitCode};
use crate::infra::config::YamlConfigStore;

/// Redeploy a compose application: sync assets, rebuild, restart, health-check
#[derive(Parser)]
#[command(
    name = "redeploy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config file (default: ~/.redeploy/config.yaml)
    #[arg(long, global = true, env = "REDEPLOY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any `NO_COLOR` value except `0`/`false` counts)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Per-field configuration overrides.
#[derive(Args, Default)]
pub struct OverrideArgs {
    /// URL of the asset tarball
    #[arg(long, global = true, value_name = "URL")]
    pub archive_url: Option<String>,

    /// Directory the assets are extracted into
    #[arg(long, global = true, value_name = "DIR")]
    pub deploy_dir: Option<PathBuf>,

    /// Path to the compose executable
    #[arg(long, global = true, value_name = "PATH")]
    pub compose_exe: Option<PathBuf>,

    /// Compose descriptor file name
    #[arg(long, global = true, value_name = "NAME")]
    pub compose_file: Option<String>,

    /// Directory holding the compose descriptor
    #[arg(long, global = true, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Health endpoint polled after launch
    #[arg(long, global = true, value_name = "URL")]
    pub health_url: Option<String>,

    /// Seconds to wait for the health endpoint
    #[arg(long = "health-timeout", global = true, value_name = "SECS")]
    pub health_timeout_secs: Option<u64>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            archive_url: args.archive_url,
            deploy_dir: args.deploy_dir,
            compose_exe: args.compose_exe,
            compose_file: args.compose_file,
            work_dir: args.work_dir,
            health_url: args.health_url,
            health_timeout_secs: args.health_timeout_secs,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full deployment pipeline
    Deploy,

    /// Check that the compose CLI and descriptor exist
    Check,

    /// Poll the health endpoint
    Health,

    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            config,
            quiet,
            no_color,
            overrides,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags { no_color, quiet },
            config_store: YamlConfigStore::new(config),
            overrides: overrides.into(),
        })?;

        match command {
            Command::Deploy => commands::deploy::run(&app).await,
            Command::Check => commands::check::run(&app).await,
            Command::Health => commands::health::run(&app).await,
            Command::Config => commands::config::run(&app),
        }
    }
}
