//! Command implementations

pub mod check;
pub mod config;
pub mod deploy;
pub mod health;

use crate::app::AppContext;
use crate::domain::{ExitCode, Halt};

/// Report how a pipeline run ended and map it to the process exit code.
///
/// Halts are printed on stderr and are never suppressed by `--quiet`.
pub(crate) fn finish(app: &AppContext, result: Result<(), Halt>, done: &str) -> ExitCode {
    match result {
        Ok(()) => {
            app.output.done(done);
            ExitCode::Success
        }
        Err(halt) => {
            app.output.error(&halt.to_string());
            halt.exit_code()
        }
    }
}
