use crate::{
    outcome::{OutcomeStatus, TestOutcome},
    thrown::Thrown,
    verify::messages,
};

/// The host's generic unhandled-exception classifier.
///
/// When a thrown exception does not match the expected type, the verifier does
/// not invent a verdict on its own: it first delegates to this recorder, which
/// applies the host pipeline's rules for raw, unexpected exceptions. Only a
/// resulting [`OutcomeStatus::Error`] is then rewritten into the "wrong type"
/// failure; any other status the recorder chooses (a skip signal, an ignore
/// signal, an inconclusive verdict) is left exactly as recorded.
pub trait ExceptionRecorder {
    /// Records the raw exception into `outcome` per the host's rules
    fn record(&self, outcome: &mut TestOutcome, thrown: &Thrown);
}

/// The default recorder: every unexpected exception is an error.
///
/// Records [`OutcomeStatus::Error`] with a `"<type> : <message>"` diagnostic
/// and the thrown value's stack trace (or the fixed placeholder when none was
/// captured). Hosts that fold special exception types into skip or ignore
/// verdicts supply their own [`ExceptionRecorder`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRecorder;

impl ExceptionRecorder for StandardRecorder {
    fn record(&self, outcome: &mut TestOutcome, thrown: &Thrown) {
        outcome.set_result_with_trace(
            OutcomeStatus::Error,
            thrown.to_string(),
            messages::stack_trace_of(thrown),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_recorder_records_error() {
        let mut outcome = TestOutcome::new();
        let thrown = Thrown::new("System.InvalidOperationException", "x");

        StandardRecorder.record(&mut outcome, &thrown);
        assert_eq!(outcome.status(), OutcomeStatus::Error);
        assert_eq!(
            outcome.message(),
            Some("System.InvalidOperationException : x")
        );
        assert_eq!(outcome.stack_trace(), Some(messages::NO_TRACE_PLACEHOLDER));
    }

    #[test]
    fn test_standard_recorder_keeps_captured_trace() {
        let mut outcome = TestOutcome::new();
        let thrown = Thrown::new("Foo", "x").with_stack_trace("at Foo.Run()");

        StandardRecorder.record(&mut outcome, &thrown);
        assert_eq!(outcome.stack_trace(), Some("at Foo.Run()"));
    }
}
