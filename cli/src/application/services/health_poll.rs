//! Application service — health poll use-case.

use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::HealthProbe;
use crate::domain::{HealthVerdict, PollDecision, classify};

/// Probe `url` until it answers 200, answers anything else, or `timeout`
/// elapses.
///
/// The deadline is checked before every attempt, so a zero timeout makes no
/// request at all. A timeout too large to add to the clock means no deadline.
/// Only connection-level failures wait `interval` and retry.
pub async fn poll_health(
    probe: &impl HealthProbe,
    url: &str,
    timeout: Duration,
    interval: Duration,
) -> HealthVerdict {
    let deadline = Instant::now().checked_add(timeout);
    if deadline.is_none() {
        tracing::debug!(url, ?timeout, "timeout exceeds the clock range, polling without deadline");
    }
    let mut attempts = 0;
    let mut last_error = None;

    while deadline.is_none_or(|deadline| Instant::now() < deadline) {
        attempts += 1;
        match classify(probe.probe(url).await) {
            PollDecision::Healthy => {
                tracing::info!(url, attempts, "health endpoint is healthy");
                return HealthVerdict::Healthy { attempts };
            }
            PollDecision::Unhealthy { status } => {
                tracing::warn!(url, status, attempts, "health endpoint answered non-200");
                return HealthVerdict::BadStatus { status, attempts };
            }
            PollDecision::Retry { reason } => {
                tracing::debug!(url, attempts, %reason, "health endpoint unreachable");
                last_error = Some(reason);
                tokio::time::sleep(interval).await;
            }
        }
    }

    tracing::warn!(url, attempts, timeout_secs = timeout.as_secs_f64(), "health poll timed out");
    HealthVerdict::TimedOut {
        attempts,
        last_error,
    }
}
