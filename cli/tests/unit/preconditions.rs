//! Precondition check against a real temporary host layout.

use redeploy_cli::application::services::preconditions::check_preconditions;
use redeploy_cli::domain::PreconditionError;
use redeploy_cli::infra::fs::StdFs;

use crate::helpers::HostLayout;

#[test]
fn succeeds_when_exe_and_descriptor_exist() {
    let host = HostLayout::new();
    assert!(check_preconditions(&StdFs, &host.config).unwrap());
}

#[test]
fn missing_compose_exe_is_an_error() {
    let mut host = HostLayout::new();
    host.config.compose_exe = host.root.path().join("not-installed");

    let err = check_preconditions(&StdFs, &host.config).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<PreconditionError>(),
        Some(PreconditionError::ComposeExeMissing(_))
    ));
    assert!(err.to_string().contains("install docker-compose"), "{err}");
}

#[test]
fn compose_exe_must_be_a_regular_file() {
    let mut host = HostLayout::new();
    host.config.compose_exe = host.config.work_dir.clone();

    let err = check_preconditions(&StdFs, &host.config).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<PreconditionError>(),
        Some(PreconditionError::ComposeExeMissing(_))
    ));
}

#[test]
fn missing_descriptor_is_an_error() {
    let host = HostLayout::new();
    std::fs::remove_file(host.config.compose_path()).unwrap();

    let err = check_preconditions(&StdFs, &host.config).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<PreconditionError>(),
        Some(PreconditionError::ComposeFileMissing { .. })
    ));
    assert!(err.to_string().contains("docker-compose.yml wasn't found"), "{err}");
}

#[test]
fn descriptor_name_must_match_exactly() {
    let mut host = HostLayout::new();
    host.config.compose_file = "docker-compose.yaml".to_string();

    assert!(check_preconditions(&StdFs, &host.config).is_err());
}

#[test]
fn unreadable_work_dir_is_an_error() {
    let mut host = HostLayout::new();
    host.config.work_dir = host.root.path().join("missing");

    let err = check_preconditions(&StdFs, &host.config).expect_err("should fail");
    assert!(format!("{err:#}").contains("listing"), "{err:#}");
}
