use crate::{
    outcome::{OutcomeStatus, TestOutcome},
    thrown::Thrown,
    verify::{ExceptionHandler, ExceptionRecorder, ExecutionUnit, TestListener, TestSubject},
};

// Helper to create a directly-raised exception value
pub fn thrown_of(type_name: &str, message: &str) -> Thrown {
    Thrown::new(type_name, message)
}

// Fixture without the exception-handling capability
pub struct PlainFixture;

impl TestSubject for PlainFixture {
    fn type_name(&self) -> &str {
        "Tests.PlainFixture"
    }
}

// Fixture exposing the ExceptionHandler capability; records the type names it
// saw and optionally fails the invocation
pub struct HandlingFixture {
    pub seen: Vec<String>,
    fail_with: Option<Thrown>,
}

impl HandlingFixture {
    pub fn new() -> Self {
        HandlingFixture {
            seen: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing_with(mut self, fault: Thrown) -> Self {
        self.fail_with = Some(fault);
        self
    }
}

impl TestSubject for HandlingFixture {
    fn type_name(&self) -> &str {
        "Tests.HandlingFixture"
    }

    fn as_exception_handler(&mut self) -> Option<&mut dyn ExceptionHandler> {
        Some(self)
    }
}

impl ExceptionHandler for HandlingFixture {
    fn handle_exception(&mut self, thrown: &Thrown) -> Result<(), Thrown> {
        self.seen.push(thrown.type_name().to_string());
        match &self.fail_with {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

// Unit that completes with a fixed status and no diagnostics
pub struct CompletingUnit {
    status: OutcomeStatus,
}

impl CompletingUnit {
    pub fn new(status: OutcomeStatus) -> Self {
        CompletingUnit { status }
    }
}

impl ExecutionUnit for CompletingUnit {
    fn execute(
        &mut self,
        _subject: &mut dyn TestSubject,
        listener: &mut dyn TestListener,
        outcome: &mut TestOutcome,
    ) -> Result<(), Thrown> {
        listener.unit_started("completing unit");
        outcome.set_result(self.status);
        listener.unit_finished(outcome);
        Ok(())
    }
}

// Unit that raises a pre-built exception value on its single run
pub struct ThrowingUnit {
    thrown: Option<Thrown>,
}

impl ThrowingUnit {
    pub fn new(thrown: Thrown) -> Self {
        ThrowingUnit {
            thrown: Some(thrown),
        }
    }
}

impl ExecutionUnit for ThrowingUnit {
    fn execute(
        &mut self,
        _subject: &mut dyn TestSubject,
        listener: &mut dyn TestListener,
        _outcome: &mut TestOutcome,
    ) -> Result<(), Thrown> {
        listener.unit_started("throwing unit");
        Err(self.thrown.take().expect("unit runs exactly once"))
    }
}

// Recorder that applies a fixed status with the thrown display as message
pub struct StubRecorder {
    status: OutcomeStatus,
}

impl StubRecorder {
    pub fn new(status: OutcomeStatus) -> Self {
        StubRecorder { status }
    }
}

impl ExceptionRecorder for StubRecorder {
    fn record(&self, outcome: &mut TestOutcome, thrown: &Thrown) {
        outcome.set_result_with_message(self.status, thrown.to_string());
    }
}

// Listener that counts the notifications it receives
#[derive(Default)]
pub struct CountingListener {
    pub started: usize,
    pub finished: usize,
}

impl TestListener for CountingListener {
    fn unit_started(&mut self, _description: &str) {
        self.started += 1;
    }

    fn unit_finished(&mut self, _outcome: &TestOutcome) {
        self.finished += 1;
    }
}
