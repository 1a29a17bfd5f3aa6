use std::fmt;

/// Which bounded wait gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPhase {
    /// Waiting for the login form to render.
    Form,
    /// Waiting for a terminal marker after submitting.
    Result,
}

impl fmt::Display for WaitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitPhase::Form => write!(f, "login form"),
            WaitPhase::Result => write!(f, "login result"),
        }
    }
}

/// Terminal result of one login attempt.
///
/// Everything except `Success` maps to a nonzero process exit; the
/// variants exist so the one diagnostic line per failure can say why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The dashboard heading was found after submitting.
    Success,
    /// A terminal page state was reached but the dashboard never appeared.
    Rejected,
    /// A bounded wait elapsed without its marker appearing.
    TimedOut(WaitPhase),
    /// The driver failed mid-flow; detail was already logged.
    Error(String),
}

impl LoginOutcome {
    /// The boolean the process exit code is derived from.
    pub fn succeeded(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginOutcome::Success => write!(f, "login succeeded"),
            LoginOutcome::Rejected => write!(f, "login rejected"),
            LoginOutcome::TimedOut(phase) => write!(f, "timed out waiting for the {phase}"),
            LoginOutcome::Error(detail) => write!(f, "login errored: {detail}"),
        }
    }
}
