//! Per-step outcome reporting for best-effort bootstrap stages.
//!
//! Scaffolding is the only fatal stage of `create`; everything after it
//! (git bootstrap, remote creation, registry append) is best-effort. Each
//! such stage produces a [`StepOutcome`] so the summary can show what
//! actually happened instead of discarding failures.

use crate::error::Error;

/// Result of one best-effort bootstrap step.
#[derive(Debug)]
pub enum StepOutcome {
    /// The step ran and succeeded.
    Succeeded,
    /// The step was not attempted (disabled or unconfigured).
    Skipped,
    /// The step ran and failed; the rest of the flow continued anyway.
    Failed(String),
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StepOutcome::Skipped)
    }
}

impl From<Result<(), Error>> for StepOutcome {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => StepOutcome::Succeeded,
            Err(e) => StepOutcome::Failed(e.to_string()),
        }
    }
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::Succeeded => write!(f, "✅"),
            StepOutcome::Skipped => write!(f, "skipped"),
            StepOutcome::Failed(reason) => write!(f, "❌ {reason}"),
        }
    }
}
