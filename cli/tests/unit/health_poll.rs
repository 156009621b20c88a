//! Health poll timing tests on a paused tokio clock.

use std::time::Duration;

use redeploy_cli::application::services::health_poll::poll_health;
use redeploy_cli::domain::health::HEALTH_POLL_INTERVAL;
use redeploy_cli::domain::{HealthVerdict, ProbeResult};
use tokio::time::Instant;

use crate::helpers::{ReadyAt, ScriptedProbe, refused};

const URL: &str = "http://127.0.0.1:3000/health";

#[tokio::test(start_paused = true)]
async fn immediate_200_succeeds_without_sleeping() {
    let probe = ScriptedProbe::always(ProbeResult::Responded(200));
    let start = Instant::now();

    let verdict = poll_health(&probe, URL, Duration::from_secs(15), HEALTH_POLL_INTERVAL).await;

    assert_eq!(verdict, HealthVerdict::Healthy { attempts: 1 });
    assert_eq!(probe.calls.get(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn immediate_404_fails_after_one_request() {
    let probe = ScriptedProbe::always(ProbeResult::Responded(404));
    let start = Instant::now();

    let verdict = poll_health(&probe, URL, Duration::from_secs(15), HEALTH_POLL_INTERVAL).await;

    assert_eq!(
        verdict,
        HealthVerdict::BadStatus {
            status: 404,
            attempts: 1
        }
    );
    assert_eq!(probe.calls.get(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn unreachable_endpoint_fails_only_after_deadline() {
    let probe = ScriptedProbe::always(refused());
    let timeout = Duration::from_secs(2);
    let start = Instant::now();

    let verdict = poll_health(&probe, URL, timeout, HEALTH_POLL_INTERVAL).await;

    assert!(start.elapsed() >= timeout, "gave up after {:?}", start.elapsed());
    let HealthVerdict::TimedOut {
        attempts,
        last_error,
    } = verdict
    else {
        panic!("expected TimedOut");
    };
    assert!(attempts > 1, "should have retried, made {attempts} attempts");
    assert_eq!(attempts, probe.calls.get());
    assert!(last_error.unwrap().contains("refused"));
}

#[tokio::test(start_paused = true)]
async fn endpoint_coming_up_after_one_second_succeeds() {
    let probe = ReadyAt::after(Duration::from_secs(1));
    let start = Instant::now();

    let verdict = poll_health(&probe, URL, Duration::from_secs(5), HEALTH_POLL_INTERVAL).await;

    assert!(verdict.is_healthy(), "{verdict:?}");
    assert!(verdict.attempts() >= 3, "{verdict:?}");
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_makes_no_request() {
    let probe = ScriptedProbe::always(ProbeResult::Responded(200));

    let verdict = poll_health(&probe, URL, Duration::ZERO, HEALTH_POLL_INTERVAL).await;

    assert_eq!(
        verdict,
        HealthVerdict::TimedOut {
            attempts: 0,
            last_error: None
        }
    );
    assert_eq!(probe.calls.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn non_200_after_retries_is_not_retried() {
    let probe = ScriptedProbe::then(
        vec![refused(), refused(), ProbeResult::Responded(503)],
        ProbeResult::Responded(200),
    );

    let verdict = poll_health(&probe, URL, Duration::from_secs(15), HEALTH_POLL_INTERVAL).await;

    assert_eq!(
        verdict,
        HealthVerdict::BadStatus {
            status: 503,
            attempts: 3
        }
    );
    assert_eq!(probe.calls.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn timeout_beyond_clock_range_polls_without_deadline() {
    let probe = ScriptedProbe::then(
        vec![refused(), refused()],
        ProbeResult::Responded(200),
    );

    let verdict = poll_health(
        &probe,
        URL,
        Duration::from_secs(u64::MAX),
        HEALTH_POLL_INTERVAL,
    )
    .await;

    assert_eq!(verdict, HealthVerdict::Healthy { attempts: 3 });
}

#[tokio::test(start_paused = true)]
async fn timeout_beyond_clock_range_still_stops_on_bad_status() {
    let probe = ScriptedProbe::always(ProbeResult::Responded(500));

    let verdict = poll_health(
        &probe,
        URL,
        Duration::from_secs(u64::MAX),
        HEALTH_POLL_INTERVAL,
    )
    .await;

    assert_eq!(
        verdict,
        HealthVerdict::BadStatus {
            status: 500,
            attempts: 1
        }
    );
}
