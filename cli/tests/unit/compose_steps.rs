//! Teardown, build and launch invoke the compose CLI with fixed arguments.

use std::path::Path;

use redeploy_cli::application::ports::ChildOutput;
use redeploy_cli::application::services::compose::{build, launch, teardown};

use crate::helpers::{ScriptedRunner, SpawnFailRunner};

const EXE: &str = "/usr/local/bin/docker-compose";

#[tokio::test]
async fn teardown_runs_down_with_output_discarded() {
    let runner = ScriptedRunner::default();
    assert!(teardown(&runner, Path::new(EXE)).await.unwrap());
    assert_eq!(
        *runner.calls.borrow(),
        [(vec!["down".to_string()], ChildOutput::Discard)]
    );
}

#[tokio::test]
async fn teardown_result_mirrors_exit_code() {
    let runner = ScriptedRunner::exiting("down", 1);
    assert!(!teardown(&runner, Path::new(EXE)).await.unwrap());
}

#[tokio::test]
async fn build_pulls_and_streams_output() {
    let runner = ScriptedRunner::default();
    assert!(build(&runner, Path::new(EXE)).await.unwrap());
    assert_eq!(
        *runner.calls.borrow(),
        [(
            vec!["build".to_string(), "--pull".to_string()],
            ChildOutput::Inherit
        )]
    );
}

#[tokio::test]
async fn launch_starts_detached_with_output_discarded() {
    let runner = ScriptedRunner::exiting("up", 17);
    assert!(!launch(&runner, Path::new(EXE)).await.unwrap());
    assert_eq!(
        *runner.calls.borrow(),
        [(
            vec!["up".to_string(), "-d".to_string()],
            ChildOutput::Discard
        )]
    );
}

#[tokio::test]
async fn spawn_failure_is_an_error_not_a_negative_result() {
    let err = teardown(&SpawnFailRunner, Path::new(EXE))
        .await
        .expect_err("spawn failure should propagate");
    assert!(err.to_string().contains("permission denied"), "{err}");
}
