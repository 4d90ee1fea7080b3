use std::fmt;

use strum::{EnumCount, EnumIter};

/// The verdict category of one test run.
///
/// Statuses are ordered by severity: a comparison between two statuses tells which
/// one dominates when results are aggregated, with [`OutcomeStatus::Error`] being
/// the most severe and [`OutcomeStatus::Inconclusive`] the least.
///
/// The exception-expectation verifier only ever rewrites `Success` (into `Failure`
/// when no exception occurred) and `Error` (into `Failure` when the wrong exception
/// type was recorded). Every other status reaching it is preserved verbatim, so a
/// host that signals skipped or ignored tests through its own exception
/// classification keeps full control over those verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
pub enum OutcomeStatus {
    /// The run produced no verdict yet, or the unit declined to decide.
    #[default]
    Inconclusive,
    /// The test was skipped before running.
    Skipped,
    /// The test was deliberately ignored.
    Ignored,
    /// The test met its expectation.
    Success,
    /// The test ran but did not meet its expectation.
    Failure,
    /// The test could not run to a verdict because something broke.
    Error,
}

impl OutcomeStatus {
    /// Returns true if this status represents a passing verdict
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeStatus::Success)
    }

    /// Returns true if this status represents a failing verdict, counting both
    /// unmet expectations and hard errors
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, OutcomeStatus::Failure | OutcomeStatus::Error)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutcomeStatus::Inconclusive => "Inconclusive",
            OutcomeStatus::Skipped => "Skipped",
            OutcomeStatus::Ignored => "Ignored",
            OutcomeStatus::Success => "Success",
            OutcomeStatus::Failure => "Failure",
            OutcomeStatus::Error => "Error",
        })
    }
}
