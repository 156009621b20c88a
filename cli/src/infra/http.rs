//! HTTP infrastructure — implements `HealthProbe` and `Downloader` with ureq.
//!
//! ureq is blocking, so every call is moved onto the blocking pool with
//! `spawn_blocking` and awaited right away.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{Downloader, HealthProbe};
use crate::domain::ProbeResult;

/// Connect timeout for a single health probe.
const PROBE_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Overall timeout for a single health probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// ureq-backed HTTP client.
///
/// Probes use short timeouts so one hung request cannot outlive the poll
/// deadline by much. Downloads have no timeout.
#[derive(Clone)]
pub struct UreqHttp {
    probe_agent: ureq::Agent,
    download_agent: ureq::Agent,
}

impl Default for UreqHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqHttp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            probe_agent: ureq::AgentBuilder::new()
                .timeout_connect(PROBE_CONNECT_TIMEOUT)
                .timeout(PROBE_TIMEOUT)
                .build(),
            download_agent: ureq::AgentBuilder::new().build(),
        }
    }
}

fn probe_blocking(agent: &ureq::Agent, url: &str) -> ProbeResult {
    match agent.get(url).call() {
        Ok(response) => ProbeResult::Responded(response.status()),
        Err(ureq::Error::Status(code, _)) => ProbeResult::Responded(code),
        Err(ureq::Error::Transport(transport)) => ProbeResult::Unreachable {
            reason: transport.to_string(),
        },
    }
}

fn download_blocking(agent: &ureq::Agent, url: &str, dest: &Path) -> Result<u64> {
    let response = match agent.get(url).call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => anyhow::bail!("Download failed: HTTP {code}"),
        Err(e) => return Err(e).context("Download failed"),
    };

    let mut file = std::fs::File::create(dest)
        .with_context(|| format!("creating {}", dest.display()))?;
    let mut reader = response.into_reader();
    std::io::copy(&mut reader, &mut file).context("Download interrupted")
}

impl HealthProbe for UreqHttp {
    async fn probe(&self, url: &str) -> ProbeResult {
        let agent = self.probe_agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || probe_blocking(&agent, &url))
            .await
            .unwrap_or_else(|e| ProbeResult::Unreachable {
                reason: format!("probe task failed: {e}"),
            })
    }
}

impl Downloader for UreqHttp {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let agent = self.download_agent.clone();
        let url = url.to_string();
        let dest: PathBuf = dest.to_path_buf();
        tokio::task::spawn_blocking(move || download_blocking(&agent, &url, &dest))
            .await
            .context("spawn_blocking for download")?
    }
}
