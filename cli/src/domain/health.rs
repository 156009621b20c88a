//! Health endpoint response classification.
//!
//! Pure domain logic: turns one probe attempt into a decision for the poll loop.

use std::time::Duration;

/// Delay between probes after a connection-level failure.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// HTTP status that counts as healthy. Nothing else does.
pub const HEALTHY_STATUS: u16 = 200;

/// Result of a single probe of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The server answered with this HTTP status.
    Responded(u16),
    /// No HTTP response: refused, reset, DNS failure, timeout.
    Unreachable { reason: String },
}

/// What the poll loop does next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollDecision {
    Healthy,
    Unhealthy { status: u16 },
    Retry { reason: String },
}

/// Map a probe result to the next loop action.
///
/// Only connection-level failures are retried. A response with any status
/// other than 200 ends the poll, even when time remains.
#[must_use]
pub fn classify(result: ProbeResult) -> PollDecision {
    match result {
        ProbeResult::Responded(HEALTHY_STATUS) => PollDecision::Healthy,
        ProbeResult::Responded(status) => PollDecision::Unhealthy { status },
        ProbeResult::Unreachable { reason } => PollDecision::Retry { reason },
    }
}

/// Final verdict of a health poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthVerdict {
    Healthy { attempts: u32 },
    BadStatus { status: u16, attempts: u32 },
    TimedOut { attempts: u32, last_error: Option<String> },
}

impl HealthVerdict {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Healthy { attempts }
            | Self::BadStatus { attempts, .. }
            | Self::TimedOut { attempts, .. } => *attempts,
        }
    }
}
