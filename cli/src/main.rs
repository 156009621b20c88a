//! Redeploy CLI - single-host compose deployment with health check

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;
use redeploy_cli::cli::Cli;
use redeploy_cli::domain::ExitCode;
use redeploy_cli::output::OutputContext;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (no_color, quiet) = (cli.no_color, cli.quiet);
    let code = match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            OutputContext::new(no_color, quiet).error(&format!("{e:#}"));
            ExitCode::Unexpected
        }
    };
    std::process::ExitCode::from(u8::from(code))
}
