//! Unit tests for the redeploy CLI
//!
//! These tests use fake port implementations and run fast without network
//! access or a real compose CLI.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod compose_steps;
mod health_poll;
mod preconditions;
