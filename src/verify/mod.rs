//! The exception-expectation verification protocol.
//!
//! This module carries the orchestrating side of the crate: the pipeline seams
//! an embedding host implements, and the verifier that drives one wrapped unit
//! through the "run once, expect exactly one exception meeting a
//! specification" protocol.
//!
//! # Seams
//!
//! - [`ExecutionUnit`] - one composable pipeline step; raising an exception is
//!   `Err(Thrown)` on its error channel
//! - [`TestSubject`] - the fixture instance, contributing its type name and an
//!   optional [`ExceptionHandler`] capability
//! - [`TestListener`] / [`NullListener`] - the event sink forwarded, unchanged,
//!   to the wrapped unit
//! - [`HandlerResolver`] / [`HandlerRegistry`] / [`NullResolver`] - lookup of
//!   handlers pre-resolved at setup time
//! - [`ExceptionRecorder`] / [`StandardRecorder`] - the host's classifier for
//!   raw, unexpected exceptions
//!
//! # Verification
//!
//! [`ExpectedExceptionVerifier`] wraps an inner unit and converts the observed
//! run into exactly one terminal [`TestOutcome`](crate::TestOutcome) state,
//! with diagnostics built by [`messages`].
//!
//! # Examples
//!
//! ```rust
//! use throwspec::prelude::*;
//!
//! struct Fixture;
//! impl TestSubject for Fixture {
//!     fn type_name(&self) -> &str {
//!         "Tests.Fixture"
//!     }
//! }
//!
//! struct Completes;
//! impl ExecutionUnit for Completes {
//!     fn execute(
//!         &mut self,
//!         _subject: &mut dyn TestSubject,
//!         _listener: &mut dyn TestListener,
//!         outcome: &mut TestOutcome,
//!     ) -> Result<(), Thrown> {
//!         outcome.set_result(OutcomeStatus::Success);
//!         Ok(())
//!     }
//! }
//!
//! let spec = ExpectationSpec::of_type("System.ArgumentException");
//! let mut verifier = ExpectedExceptionVerifier::new(Box::new(Completes), spec);
//!
//! let mut outcome = TestOutcome::new();
//! verifier.execute(&mut Fixture, &mut NullListener, &mut outcome).unwrap();
//!
//! // The unit completed without throwing, so the expectation failed.
//! assert_eq!(outcome.status(), OutcomeStatus::Failure);
//! assert_eq!(outcome.message(), Some("System.ArgumentException was expected"));
//! ```

mod handler;
pub mod messages;
mod recorder;
mod unit;
mod verifier;

pub use handler::{ExceptionHandler, HandlerFn, HandlerRegistry, HandlerResolver, NullResolver};
pub use recorder::{ExceptionRecorder, StandardRecorder};
pub use unit::{ExecutionUnit, NullListener, TestListener, TestSubject};
pub use verifier::ExpectedExceptionVerifier;
