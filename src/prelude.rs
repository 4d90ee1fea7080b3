//! # throwspec Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the throwspec library. Import this module to get quick access to the essential
//! types for exception-expectation verification.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all throwspec configuration operations
pub use crate::Error;

/// The result type used throughout throwspec
pub use crate::Result;

// ================================================================================================
// Expectations
// ================================================================================================

/// Immutable description of the exception a test is required to throw
pub use crate::expectation::ExpectationSpec;

/// Validating builder for expectation specs
pub use crate::expectation::ExpectationSpecBuilder;

/// Message comparison strategy (Exact/Contains/StartsWith/Regex)
pub use crate::expectation::MatchMode;

// ================================================================================================
// Outcomes
// ================================================================================================

/// Verdict category of one test run, ordered by severity
pub use crate::outcome::OutcomeStatus;

/// Mutable result record threaded through the pipeline
pub use crate::outcome::TestOutcome;

// ================================================================================================
// Observed Exceptions
// ================================================================================================

/// Cooperative-cancellation handle raised by the host, acknowledged by the verifier
pub use crate::thrown::AbortSignal;

/// An observed exception captured as a plain value
pub use crate::thrown::Thrown;

/// How a thrown value entered the pipeline
pub use crate::thrown::ThrownKind;

// ================================================================================================
// Verification Pipeline
// ================================================================================================

/// The exception-handling capability a test subject may expose
pub use crate::verify::ExceptionHandler;

/// The host's classifier for raw, unexpected exceptions
pub use crate::verify::ExceptionRecorder;

/// One composable step in a test-running pipeline
pub use crate::verify::ExecutionUnit;

/// The orchestrating verifier implementing the expectation protocol
pub use crate::verify::ExpectedExceptionVerifier;

/// Pre-resolved handler callback bound to a subject type
pub use crate::verify::HandlerFn;

/// Standard map-backed handler resolver
pub use crate::verify::HandlerRegistry;

/// Lookup of pre-resolved exception handlers by subject type
pub use crate::verify::HandlerResolver;

/// Listener that discards every notification
pub use crate::verify::NullListener;

/// Resolver that never finds a handler
pub use crate::verify::NullResolver;

/// Default recorder classifying every unexpected exception as an error
pub use crate::verify::StandardRecorder;

/// Event sink consuming execution notifications
pub use crate::verify::TestListener;

/// The instance a test runs against
pub use crate::verify::TestSubject;
