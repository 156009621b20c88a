//! Pipeline vocabulary: steps, halts and process exit codes.

use std::fmt;

/// How a step reports its status on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    /// `message...` then `OK` or `FAILED` on the same line.
    Inline,
    /// `message` on its own line; the step's own output is the feedback.
    Announce,
}

/// A named stage of the deployment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub message: &'static str,
    pub style: StatusStyle,
}

pub const PRECONDITIONS: Step = Step {
    name: "preconditions",
    message: "Checking Requirements...",
    style: StatusStyle::Inline,
};

pub const TEARDOWN: Step = Step {
    name: "teardown",
    message: "Stopping Old Deployments If Exists...",
    style: StatusStyle::Inline,
};

pub const ASSET_SYNC: Step = Step {
    name: "asset-sync",
    message: "Downloading Image Resources...",
    style: StatusStyle::Inline,
};

pub const BUILD: Step = Step {
    name: "build",
    message: "Building Application...",
    style: StatusStyle::Announce,
};

pub const LAUNCH: Step = Step {
    name: "launch",
    message: "Deploying Application Using Docker Compose...",
    style: StatusStyle::Inline,
};

pub const HEALTH_POLL: Step = Step {
    name: "health",
    message: "Checking Health Condition...",
    style: StatusStyle::Inline,
};

/// The full deploy sequence, in execution order.
pub const DEPLOY_STEPS: [Step; 6] = [
    PRECONDITIONS,
    TEARDOWN,
    ASSET_SYNC,
    BUILD,
    LAUNCH,
    HEALTH_POLL,
];

/// Process exit codes.
///
/// Mapping:
///   0 — every step succeeded
///   1 — a step returned a negative result
///   2 — a step raised an unexpected error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    StepFailed = 1,
    Unexpected = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}

/// Why the pipeline stopped before the last step finished.
#[derive(Debug)]
pub enum Halt {
    Failed { step: Step },
    Errored { step: Step, error: anyhow::Error },
}

impl Halt {
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Self::Failed { step } | Self::Errored { step, .. } => *step,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Failed { .. } => ExitCode::StepFailed,
            Self::Errored { .. } => ExitCode::Unexpected,
        }
    }
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { step } => write!(f, "step '{}' failed", step.name),
            Self::Errored { step, error } => write!(f, "step '{}' errored: {error:#}", step.name),
        }
    }
}

/// Result of a whole pipeline run.
#[derive(Debug)]
pub enum DeployOutcome {
    Deployed,
    Halted(Halt),
}

impl DeployOutcome {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Deployed => ExitCode::Success,
            Self::Halted(halt) => halt.exit_code(),
        }
    }
}
