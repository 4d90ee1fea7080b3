use crate::outcome::OutcomeStatus;

/// The mutable result record of one test execution.
///
/// A `TestOutcome` is owned by the caller of the pipeline and threaded by mutable
/// reference through every [`ExecutionUnit`](crate::verify::ExecutionUnit) in the chain.
/// The innermost unit fills it in while running; a wrapping verifier may overwrite
/// it exactly once after the unit returns or raises; the caller then hands the
/// record onward to its listener or reporter.
///
/// A fresh record starts [`Inconclusive`](OutcomeStatus::Inconclusive) with no
/// message and no stack trace.
///
/// # Examples
///
/// ```rust
/// use throwspec::{OutcomeStatus, TestOutcome};
///
/// let mut outcome = TestOutcome::new();
/// assert_eq!(outcome.status(), OutcomeStatus::Inconclusive);
///
/// outcome.set_result_with_message(OutcomeStatus::Failure, "Foo was expected");
/// assert_eq!(outcome.message(), Some("Foo was expected"));
///
/// // Setting a bare result clears any previous diagnostics.
/// outcome.set_result(OutcomeStatus::Success);
/// assert_eq!(outcome.message(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOutcome {
    status: OutcomeStatus,
    message: Option<String>,
    stack_trace: Option<String>,
}

impl TestOutcome {
    /// Creates a fresh, inconclusive outcome with no diagnostics
    #[must_use]
    pub fn new() -> Self {
        TestOutcome::default()
    }

    /// Returns the current verdict status
    #[must_use]
    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    /// Returns the human-readable diagnostic, if one was recorded
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the captured stack trace, if one was recorded
    #[must_use]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Sets the verdict and clears any previously recorded message and stack trace.
    pub fn set_result(&mut self, status: OutcomeStatus) {
        self.status = status;
        self.message = None;
        self.stack_trace = None;
    }

    /// Sets the verdict together with a diagnostic message, clearing any stack trace.
    pub fn set_result_with_message(&mut self, status: OutcomeStatus, message: impl Into<String>) {
        self.status = status;
        self.message = Some(message.into());
        self.stack_trace = None;
    }

    /// Sets the verdict together with a diagnostic message and a captured stack trace.
    pub fn set_result_with_trace(
        &mut self,
        status: OutcomeStatus,
        message: impl Into<String>,
        stack_trace: impl Into<String>,
    ) {
        self.status = status;
        self.message = Some(message.into());
        self.stack_trace = Some(stack_trace.into());
    }
}
