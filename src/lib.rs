// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # throwspec
//!
//! [![Crates.io](https://img.shields.io/crates/v/throwspec.svg)](https://crates.io/crates/throwspec)
//! [![Documentation](https://docs.rs/throwspec/badge.svg)](https://docs.rs/throwspec)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/throwspec/blob/main/LICENSE-APACHE)
//!
//! The exception-expectation verification core for test execution pipelines. Given a
//! test unit declared to throw a specific exception, `throwspec` runs that unit once,
//! observes whether an exception occurred, classifies it against the declared
//! expectation (type identity and/or message pattern), and converts the observation
//! into a pass/fail verdict with a precise, user-facing diagnostic.
//!
//! ## Features
//!
//! - **🎯 Precise classification** - Distinct verdicts and diagnostics for "no
//!   exception", "wrong exception type", and "right type, wrong message"
//! - **🔍 Four message match modes** - Exact, substring, prefix, and regex
//!   comparison of the observed exception message
//! - **🧩 Composable pipeline seams** - The verifier is itself an execution unit and
//!   wraps any inner unit; subjects, listeners, handler resolvers, and exception
//!   recorders are all small traits
//! - **🛡️ No silent swallowing** - Host abort signals are acknowledged and then
//!   classified, non-Error verdicts from the host's own exception recorder pass
//!   through untouched, and a defective user handler propagates as a hard failure
//! - **📦 Exceptions as values** - Observed failures travel as tagged [`Thrown`]
//!   values, never as unwinding control flow
//!
//! ## Quick Start
//!
//! Add `throwspec` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! throwspec = "0.1"
//! ```
//!
//! ### Using the Prelude
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
//! struct FailsToParse;
//! impl ExecutionUnit for FailsToParse {
//!     fn execute(
//!         &mut self,
//!         _subject: &mut dyn TestSubject,
//!         _listener: &mut dyn TestListener,
//!         _outcome: &mut TestOutcome,
//!     ) -> Result<(), Thrown> {
//!         Err(Thrown::new("System.FormatException", "input `x7` is not a number"))
//!     }
//! }
//!
//! let spec = ExpectationSpec::builder()
//!     .expected_type_name("System.FormatException")
//!     .expected_message("is not a number")
//!     .match_mode(MatchMode::Contains)
//!     .build()?;
//!
//! let mut verifier = ExpectedExceptionVerifier::new(Box::new(FailsToParse), spec);
//! let mut outcome = TestOutcome::new();
//! verifier.execute(&mut Fixture, &mut NullListener, &mut outcome).unwrap();
//!
//! assert_eq!(outcome.status(), OutcomeStatus::Success);
//! # Ok::<(), throwspec::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `throwspec` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`expectation`] - Declarative exception expectations and match modes
//! - [`outcome`] - Verdict statuses and the mutable result record
//! - [`thrown`] - Observed exceptions as tagged values, including host aborts
//! - [`verify`] - The pipeline seams and the orchestrating verifier
//! - [`Error`] and [`Result`] - Configuration-time error handling
//!
//! ### The Verification Protocol
//!
//! [`ExpectedExceptionVerifier`] wraps an inner [`verify::ExecutionUnit`] and runs it
//! exactly once. Each call ends in exactly one terminal outcome state:
//!
//! | Observation | Verdict |
//! |-------------|---------|
//! | Unit completed successfully | `Failure`, "`<Type>` was expected" |
//! | Wrong exception type, recorder says `Error` | `Failure`, expected/actual type diagnostic |
//! | Wrong exception type, recorder says anything else | recorder's verdict, untouched |
//! | Right type, message fails its match mode | `Failure`, mode-specific diagnostic |
//! | Type and message match | handler runs, then `Success` |
//!
//! A unit that raised is never silently re-classified: the pipeline's own internal
//! wrapper exceptions are unwrapped exactly one level, host abort signals are
//! acknowledged before classification, and a failing user handler propagates out of
//! the verifier unchanged.
//!
//! ## Error Handling
//!
//! Configuration failures return [`Result<T, Error>`](Result); the only variant today
//! is a malformed regex pattern rejected at build time:
//!
//! ```rust
//! use throwspec::{Error, ExpectationSpec, MatchMode};
//!
//! let result = ExpectationSpec::builder()
//!     .expected_message("[unclosed")
//!     .match_mode(MatchMode::Regex)
//!     .build();
//!
//! assert!(matches!(result, Err(Error::MalformedPattern { .. })));
//! ```
//!
//! Runtime mismatches never surface as `Err`: they are written into the caller-owned
//! [`TestOutcome`], keeping the verifier's boundary quiet for everything except a
//! genuinely broken user handler.

pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the throwspec library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use throwspec::prelude::*;
///
/// let spec = ExpectationSpec::of_type("System.ArgumentException");
/// assert!(spec.matches_type("System.ArgumentException"));
/// ```
pub mod prelude;

/// Declarative exception expectations.
///
/// An [`expectation::ExpectationSpec`] describes what a test unit is required to
/// throw: an optional fully qualified type name, an optional message constraint
/// compared under an [`expectation::MatchMode`], and an optional user message
/// prefixed to every diagnostic. Specs are immutable once built; the validating
/// builder rejects malformed regex patterns at setup time.
pub mod expectation;

/// Verdict statuses and the mutable result record of one test execution.
///
/// [`outcome::OutcomeStatus`] enumerates the possible verdicts ordered by
/// severity; [`outcome::TestOutcome`] is the caller-owned record the pipeline
/// threads by mutable reference through every execution unit.
pub mod outcome;

/// Observed exceptions as tagged values.
///
/// [`thrown::Thrown`] captures the type name, message, optional stack trace, and
/// optional cause of an exception observed during a run;
/// [`thrown::ThrownKind`] tags host aborts and the pipeline's own infrastructure
/// wrappers, and [`thrown::AbortSignal`] is the cooperative-cancellation handle
/// the verifier acknowledges before classification.
pub mod thrown;

/// The pipeline seams and the orchestrating verifier.
///
/// Hosts implement [`verify::ExecutionUnit`], [`verify::TestSubject`],
/// [`verify::TestListener`], [`verify::HandlerResolver`], and
/// [`verify::ExceptionRecorder`]; [`verify::ExpectedExceptionVerifier`] drives
/// the protocol, with diagnostics built by [`verify::messages`].
pub mod verify;

/// `throwspec` Result type
///
/// A type alias for [`std::result::Result`] whose error type defaults to
/// [`Error`], used throughout the crate for fallible configuration. The error
/// parameter stays overridable so pipeline signatures like
/// `Result<(), Thrown>` keep working where the alias is in scope.
///
/// # Examples
///
/// ```rust
/// use throwspec::{ExpectationSpec, MatchMode, Result};
///
/// fn strict_spec() -> Result<ExpectationSpec> {
///     ExpectationSpec::builder()
///         .expected_message(r"^argument \d+$")
///         .match_mode(MatchMode::Regex)
///         .build()
/// }
/// # strict_spec().unwrap();
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// `throwspec` Error type
///
/// The main error type for configuration operations in this crate. Runtime
/// expectation mismatches are reported through [`TestOutcome`], never through
/// this type.
///
/// # Examples
///
/// ```rust
/// use throwspec::{Error, ExpectationSpec, MatchMode};
///
/// let result = ExpectationSpec::builder()
///     .expected_message("(")
///     .match_mode(MatchMode::Regex)
///     .build();
/// assert!(matches!(result, Err(Error::MalformedPattern { .. })));
/// ```
pub use error::Error;

/// Immutable description of the exception a test is required to throw.
///
/// See [`expectation::ExpectationSpec`] for constraint details and the
/// validating builder.
pub use expectation::{ExpectationSpec, ExpectationSpecBuilder, MatchMode};

/// Verdict statuses and the result record threaded through the pipeline.
///
/// See [`outcome::TestOutcome`] for the rewrite-exactly-once lifecycle.
pub use outcome::{OutcomeStatus, TestOutcome};

/// Observed exceptions as tagged values, with host-abort support.
///
/// See [`thrown::Thrown`] for construction and the single-level unwrap of
/// infrastructure wrappers.
pub use thrown::{AbortSignal, Thrown, ThrownKind};

/// Main entry point for exception-expectation verification.
///
/// See [`verify::ExpectedExceptionVerifier`] for the full protocol and
/// [`verify`] for the seams a host pipeline implements around it.
///
/// # Example
///
/// ```rust
/// use throwspec::{ExpectationSpec, ExpectedExceptionVerifier};
/// # use throwspec::prelude::*;
/// # struct Unit;
/// # impl ExecutionUnit for Unit {
/// #     fn execute(&mut self, _s: &mut dyn TestSubject, _l: &mut dyn TestListener,
/// #         _o: &mut TestOutcome) -> Result<(), Thrown> {
/// #         Err(Thrown::new("System.ArgumentException", "bad"))
/// #     }
/// # }
/// let spec = ExpectationSpec::of_type("System.ArgumentException");
/// let verifier = ExpectedExceptionVerifier::new(Box::new(Unit), spec);
/// assert_eq!(verifier.spec().expected_type_name(), Some("System.ArgumentException"));
/// ```
pub use verify::{ExpectedExceptionVerifier, HandlerRegistry, StandardRecorder};
