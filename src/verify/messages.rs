//! Diagnostic text builders for verification verdicts.
//!
//! Pure functions over an [`ExpectationSpec`] and an observed [`Thrown`] value.
//! Output is deterministic: identical inputs produce byte-identical text, so a
//! reporter can rely on stable diagnostics across retries. Every builder
//! prefixes the spec's user message, when present, followed by a line break.
//!
//! The exact wording is part of the crate's contract with reporters and is
//! covered literally by tests.

use crate::{
    expectation::{ExpectationSpec, MatchMode},
    thrown::Thrown,
};

/// Substituted for a stack trace that was never captured.
///
/// Trace capture is best-effort; a missing trace must not turn into a secondary
/// failure while reporting the primary one.
pub const NO_TRACE_PLACEHOLDER: &str = "No stack trace available";

/// Builds the diagnostic for a unit that completed without throwing.
///
/// Produces `"<Type> was expected"`, with the literal `"An Exception"` standing
/// in when the spec does not constrain the type.
#[must_use]
pub fn no_exception(spec: &ExpectationSpec) -> String {
    let expected = spec.expected_type_name().unwrap_or("An Exception");
    combine_with_user_message(spec, format!("{} was expected", expected))
}

/// Builds the diagnostic for an exception of the wrong type.
#[must_use]
pub fn wrong_type(spec: &ExpectationSpec, thrown: &Thrown) -> String {
    combine_with_user_message(
        spec,
        format!(
            "An unexpected exception type was thrown\nExpected: {}\n but was: {} : {}",
            spec.expected_type_name().unwrap_or_default(),
            thrown.type_name(),
            thrown.message()
        ),
    )
}

/// Builds the diagnostic for a matching type whose message failed the
/// [`MatchMode`] comparison.
#[must_use]
pub fn wrong_text(spec: &ExpectationSpec, thrown: &Thrown) -> String {
    let expected_label = match spec.match_mode() {
        MatchMode::Exact => "Expected: ",
        MatchMode::Contains => "Expected message containing: ",
        MatchMode::StartsWith => "Expected message starting: ",
        MatchMode::Regex => "Expected message matching: ",
    };

    combine_with_user_message(
        spec,
        format!(
            "The exception message text was incorrect\n{}{}\n but was: {}",
            expected_label,
            spec.expected_message().unwrap_or_default(),
            thrown.message()
        ),
    )
}

/// Returns the thrown value's captured stack trace, or
/// [`NO_TRACE_PLACEHOLDER`] when none was recorded.
#[must_use]
pub fn stack_trace_of(thrown: &Thrown) -> String {
    thrown
        .stack_trace()
        .unwrap_or(NO_TRACE_PLACEHOLDER)
        .to_string()
}

fn combine_with_user_message(spec: &ExpectationSpec, text: String) -> String {
    match spec.user_message() {
        Some(user) => format!("{}\n{}", user, text),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_user_message() -> ExpectationSpec {
        ExpectationSpec::builder()
            .expected_type_name("System.ArgumentException")
            .user_message("parser must reject junk")
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_exception_with_type() {
        let spec = ExpectationSpec::of_type("System.ArgumentException");
        assert_eq!(
            no_exception(&spec),
            "System.ArgumentException was expected"
        );
    }

    #[test]
    fn test_no_exception_without_type() {
        let spec = ExpectationSpec::any();
        assert_eq!(no_exception(&spec), "An Exception was expected");
    }

    #[test]
    fn test_no_exception_user_message_prefix() {
        let spec = spec_with_user_message();
        assert_eq!(
            no_exception(&spec),
            "parser must reject junk\nSystem.ArgumentException was expected"
        );
    }

    #[test]
    fn test_wrong_type_message() {
        let spec = ExpectationSpec::of_type("System.ArgumentException");
        let thrown = Thrown::new("System.InvalidOperationException", "x");
        assert_eq!(
            wrong_type(&spec, &thrown),
            "An unexpected exception type was thrown\nExpected: System.ArgumentException\n but was: System.InvalidOperationException : x"
        );
    }

    #[test]
    fn test_wrong_text_labels_per_mode() {
        let thrown = Thrown::new("Foo", "zzabc");
        let cases = [
            (MatchMode::Exact, "Expected: "),
            (MatchMode::Contains, "Expected message containing: "),
            (MatchMode::StartsWith, "Expected message starting: "),
            (MatchMode::Regex, "Expected message matching: "),
        ];

        for (mode, label) in cases {
            let spec = ExpectationSpec::builder()
                .expected_message("abc")
                .match_mode(mode)
                .build()
                .unwrap();
            let text = wrong_text(&spec, &thrown);
            assert_eq!(
                text,
                format!(
                    "The exception message text was incorrect\n{}abc\n but was: zzabc",
                    label
                )
            );
        }
    }

    #[test]
    fn test_wrong_text_user_message_prefix() {
        let spec = ExpectationSpec::builder()
            .expected_message("abc")
            .user_message("context")
            .build()
            .unwrap();
        let thrown = Thrown::new("Foo", "def");
        assert!(wrong_text(&spec, &thrown).starts_with("context\n"));
    }

    #[test]
    fn test_stack_trace_of_placeholder() {
        let without = Thrown::new("Foo", "x");
        assert_eq!(stack_trace_of(&without), NO_TRACE_PLACEHOLDER);

        let with = Thrown::new("Foo", "x").with_stack_trace("at Foo.Run()");
        assert_eq!(stack_trace_of(&with), "at Foo.Run()");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let spec = ExpectationSpec::builder()
            .expected_type_name("System.ArgumentException")
            .expected_message("abc")
            .match_mode(MatchMode::Contains)
            .user_message("ctx")
            .build()
            .unwrap();
        let thrown = Thrown::new("System.InvalidOperationException", "def");

        assert_eq!(no_exception(&spec), no_exception(&spec));
        assert_eq!(wrong_type(&spec, &thrown), wrong_type(&spec, &thrown));
        assert_eq!(wrong_text(&spec, &thrown), wrong_text(&spec, &thrown));
    }
}
