//! Domain layer — pure deployment types, validation, and decisions.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod pipeline;

pub use config::{ConfigOverrides, DeployConfig, archive_file_name};
pub use error::{ConfigError, PreconditionError};
pub use health::{HealthVerdict, PollDecision, ProbeResult, classify};
pub use pipeline::{DeployOutcome, ExitCode, Halt, StatusStyle, Step};
