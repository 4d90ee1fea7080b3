//! Test outcome records and verdict statuses.
//!
//! This module holds the two result-side types of the verification pipeline:
//!
//! - [`OutcomeStatus`] - the enumerated verdict of a run, ordered by severity
//! - [`TestOutcome`] - the mutable record one execution produces, carrying the
//!   status plus an optional diagnostic message and captured stack trace
//!
//! The record is owned by the pipeline caller and passed by mutable reference
//! through the chain of execution units, replacing any notion of ambient
//! "current result" state: whoever holds the `&mut TestOutcome` is the only
//! party that can rewrite the verdict.
//!
//! # Examples
//!
//! ```rust
//! use throwspec::{OutcomeStatus, TestOutcome};
//!
//! let mut outcome = TestOutcome::new();
//! outcome.set_result_with_message(OutcomeStatus::Failure, "An Exception was expected");
//!
//! assert!(outcome.status().is_failure());
//! assert_eq!(outcome.message(), Some("An Exception was expected"));
//! ```

mod record;
mod status;

pub use record::TestOutcome;
pub use status::OutcomeStatus;
