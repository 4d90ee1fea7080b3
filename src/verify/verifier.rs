use crate::{
    expectation::ExpectationSpec,
    outcome::{OutcomeStatus, TestOutcome},
    thrown::{Thrown, ThrownKind},
    verify::{
        handler::{HandlerResolver, NullResolver},
        messages,
        recorder::{ExceptionRecorder, StandardRecorder},
        unit::{ExecutionUnit, TestListener, TestSubject},
    },
};

/// Runs a wrapped execution unit exactly once and classifies its result
/// against an [`ExpectationSpec`], producing exactly one terminal
/// [`TestOutcome`] state.
///
/// The verifier is itself an [`ExecutionUnit`], so the host pipeline composes
/// it around the inner unit like any other decorator. One call to
/// [`execute`](ExecutionUnit::execute) ends in exactly one of four states:
///
/// - the unit completed successfully and no exception occurred: `Failure`,
///   "`<Type>` was expected"
/// - the unit threw the wrong exception type: the host's
///   [`ExceptionRecorder`] classifies the raw exception first, and only an
///   `Error` verdict is rewritten into the "wrong type" `Failure`
/// - the unit threw the right type with the wrong message: `Failure` with the
///   mode-specific "wrong text" diagnostic
/// - type and message both matched: any resolved handler runs, then `Success`
///
/// The only condition that escapes the verifier as an error is a fault inside
/// a user-supplied exception handler; that is a test-author bug and surfaces
/// unchanged rather than being softened into a mismatch.
///
/// # Examples
///
/// ```rust
/// use throwspec::prelude::*;
///
/// struct Fixture;
/// impl TestSubject for Fixture {
///     fn type_name(&self) -> &str {
///         "Tests.Fixture"
///     }
/// }
///
/// struct Throws;
/// impl ExecutionUnit for Throws {
///     fn execute(
///         &mut self,
///         _subject: &mut dyn TestSubject,
///         _listener: &mut dyn TestListener,
///         _outcome: &mut TestOutcome,
///     ) -> Result<(), Thrown> {
///         Err(Thrown::new("System.ArgumentException", "bad"))
///     }
/// }
///
/// let spec = ExpectationSpec::of_type("System.ArgumentException");
/// let mut verifier = ExpectedExceptionVerifier::new(Box::new(Throws), spec);
///
/// let mut outcome = TestOutcome::new();
/// verifier
///     .execute(&mut Fixture, &mut NullListener, &mut outcome)
///     .unwrap();
/// assert_eq!(outcome.status(), OutcomeStatus::Success);
/// ```
pub struct ExpectedExceptionVerifier {
    inner: Box<dyn ExecutionUnit>,
    spec: ExpectationSpec,
    resolver: Box<dyn HandlerResolver>,
    recorder: Box<dyn ExceptionRecorder>,
}

impl ExpectedExceptionVerifier {
    /// Wraps `inner` with the given expectation, using no handler resolver and
    /// the [`StandardRecorder`]
    #[must_use]
    pub fn new(inner: Box<dyn ExecutionUnit>, spec: ExpectationSpec) -> Self {
        ExpectedExceptionVerifier {
            inner,
            spec,
            resolver: Box::new(NullResolver),
            recorder: Box::new(StandardRecorder),
        }
    }

    /// Replaces the handler resolver consulted for matched exceptions
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn HandlerResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the recorder consulted for wrong-type exceptions
    #[must_use]
    pub fn with_recorder(mut self, recorder: Box<dyn ExceptionRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Returns the expectation this verifier checks against
    #[must_use]
    pub fn spec(&self) -> &ExpectationSpec {
        &self.spec
    }

    /// The no-exception branch: the unit completed successfully, but the
    /// expectation was for an exception.
    fn process_no_exception(&self, outcome: &mut TestOutcome) {
        outcome.set_result_with_message(OutcomeStatus::Failure, messages::no_exception(&self.spec));
    }

    /// The exception branch: classify `thrown` and rewrite `outcome`.
    ///
    /// Expects the host-abort signal to have been acknowledged already; unwraps
    /// one internal-wrapper level itself.
    fn process_exception(
        &self,
        thrown: Thrown,
        subject: &mut dyn TestSubject,
        outcome: &mut TestOutcome,
    ) -> Result<(), Thrown> {
        let thrown = thrown.unwrap_internal();

        if !self.spec.matches_type(thrown.type_name()) {
            self.recorder.record(outcome, &thrown);
            if outcome.status() == OutcomeStatus::Error {
                log::debug!(
                    "Recorder classified {} as Error, rewriting as wrong-type failure",
                    thrown.type_name()
                );
                outcome.set_result_with_trace(
                    OutcomeStatus::Failure,
                    messages::wrong_type(&self.spec, &thrown),
                    messages::stack_trace_of(&thrown),
                );
            }
            return Ok(());
        }

        if self.spec.matches_message(thrown.message()) {
            self.invoke_handler(subject, &thrown)?;
            outcome.set_result(OutcomeStatus::Success);
        } else {
            outcome.set_result_with_trace(
                OutcomeStatus::Failure,
                messages::wrong_text(&self.spec, &thrown),
                messages::stack_trace_of(&thrown),
            );
        }

        Ok(())
    }

    /// Gives the test one chance to inspect a matched exception: a handler
    /// pre-resolved for the subject's type wins, else the subject's own
    /// capability, else nothing.
    fn invoke_handler(
        &self,
        subject: &mut dyn TestSubject,
        thrown: &Thrown,
    ) -> Result<(), Thrown> {
        if let Some(handler) = self.resolver.find_handler(subject.type_name()) {
            return handler(subject, thrown);
        }

        if let Some(handler) = subject.as_exception_handler() {
            return handler.handle_exception(thrown);
        }

        Ok(())
    }
}

impl ExecutionUnit for ExpectedExceptionVerifier {
    /// Runs the wrapped unit and converts what it observes into a verdict.
    ///
    /// # Errors
    ///
    /// Propagates a [`Thrown`] value only when a user-supplied exception
    /// handler fails; every expectation mismatch is reported through `outcome`
    /// instead.
    fn execute(
        &mut self,
        subject: &mut dyn TestSubject,
        listener: &mut dyn TestListener,
        outcome: &mut TestOutcome,
    ) -> Result<(), Thrown> {
        match self.inner.execute(subject, listener, outcome) {
            Ok(()) => {
                if outcome.status() == OutcomeStatus::Success {
                    self.process_no_exception(outcome);
                }
                Ok(())
            }
            Err(thrown) => {
                if let ThrownKind::HostAbort(signal) = thrown.kind() {
                    signal.acknowledge();
                }
                self.process_exception(thrown, subject, outcome)
            }
        }
    }
}
