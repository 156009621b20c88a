//! Sequential step runner with fail-fast semantics.

use std::future::Future;

use anyhow::Result;

use crate::application::ports::ProgressReporter;
use crate::domain::{Halt, Step};

/// Runs pipeline steps one at a time, reporting each and stopping at the
/// first step that does not succeed.
pub struct PipelineRunner<'a, P: ProgressReporter> {
    reporter: &'a P,
}

impl<'a, P: ProgressReporter> PipelineRunner<'a, P> {
    #[must_use]
    pub fn new(reporter: &'a P) -> Self {
        Self { reporter }
    }

    /// Run one step.
    ///
    /// `Ok(true)` continues the pipeline. `Ok(false)` halts with
    /// [`Halt::Failed`]; `Err` halts with [`Halt::Errored`].
    ///
    /// # Errors
    ///
    /// Returns the [`Halt`] describing why the pipeline must stop.
    pub async fn run_step<F, Fut>(&self, step: Step, action: F) -> Result<(), Halt>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        tracing::debug!(step = step.name, "step started");
        self.reporter.step_started(&step);

        match action().await {
            Ok(true) => {
                self.reporter.step_finished(&step, true);
                tracing::debug!(step = step.name, "step succeeded");
                Ok(())
            }
            Ok(false) => {
                self.reporter.step_finished(&step, false);
                tracing::warn!(step = step.name, "step failed");
                Err(Halt::Failed { step })
            }
            Err(error) => {
                self.reporter.step_finished(&step, false);
                tracing::error!(step = step.name, error = %format!("{error:#}"), "step errored");
                Err(Halt::Errored { step, error })
            }
        }
    }
}
