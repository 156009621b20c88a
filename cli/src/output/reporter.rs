//! `TerminalReporter`: prints pipeline progress on stdout.
//!
//! Inline steps print `"{message}"` then `OK` / `FAILED` on the same line.
//! Announce steps print `"{message}"` on a line of its own and nothing
//! after, since the step streams its own output. `--quiet` silences both.

use std::io::Write as _;

use crate::application::ports::ProgressReporter;
use crate::domain::{StatusStyle, Step};
use crate::output::OutputContext;

pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step_started(&self, step: &Step) {
        if self.ctx.quiet {
            return;
        }
        match step.style {
            StatusStyle::Inline => {
                print!("{}", step.message);
                if let Err(e) = std::io::stdout().flush() {
                    tracing::debug!(step = step.name, error = %e, "stdout flush failed");
                }
            }
            StatusStyle::Announce => println!("{}", step.message),
        }
    }

    fn step_finished(&self, step: &Step, ok: bool) {
        if self.ctx.quiet || step.style == StatusStyle::Announce {
            return;
        }
        println!("{}", self.ctx.status_marker(ok));
    }
}
