use regex::Regex;

use crate::{expectation::MatchMode, Error, Result};

/// An immutable description of the exception one test is required to throw.
///
/// An `ExpectationSpec` is created once at test-setup time by the discovery
/// layer and read, never written, for the lifetime of one execution. It
/// constrains up to three things:
///
/// - the exception's fully qualified type name (`None` accepts any type)
/// - the exception's message, compared under a [`MatchMode`] (`None` skips the
///   message check entirely)
/// - an optional user message prefixed to every diagnostic the verifier emits
///
/// Type matching is exact, case-sensitive string equality on the fully
/// qualified name; there is no subtype or assignability matching.
///
/// # Examples
///
/// ```rust
/// use throwspec::{ExpectationSpec, MatchMode};
///
/// let spec = ExpectationSpec::builder()
///     .expected_type_name("System.ArgumentException")
///     .expected_message("bad")
///     .match_mode(MatchMode::Contains)
///     .build()?;
///
/// assert!(spec.matches_type("System.ArgumentException"));
/// assert!(spec.matches_message("a bad argument"));
/// # Ok::<(), throwspec::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpectationSpec {
    expected_type_name: Option<String>,
    expected_message: Option<String>,
    match_mode: MatchMode,
    user_message: Option<String>,
}

impl ExpectationSpec {
    /// Creates a spec satisfied by any exception, with no message constraint
    #[must_use]
    pub fn any() -> Self {
        ExpectationSpec::default()
    }

    /// Creates a spec requiring exactly the given exception type, with no
    /// message constraint
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        ExpectationSpec {
            expected_type_name: Some(type_name.into()),
            ..ExpectationSpec::default()
        }
    }

    /// Starts building a spec with message and user-message constraints
    #[must_use]
    pub fn builder() -> ExpectationSpecBuilder {
        ExpectationSpecBuilder::default()
    }

    /// Returns the expected fully qualified type name, if the type is constrained
    #[must_use]
    pub fn expected_type_name(&self) -> Option<&str> {
        self.expected_type_name.as_deref()
    }

    /// Returns the expected message text or pattern, if the message is constrained
    #[must_use]
    pub fn expected_message(&self) -> Option<&str> {
        self.expected_message.as_deref()
    }

    /// Returns the comparison mode applied to the expected message
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Returns the user message prefixed to every diagnostic, if one was given
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    /// Checks the observed exception type against the expectation.
    ///
    /// Matches when the spec does not constrain the type, or when the observed
    /// fully qualified name equals the expected one exactly.
    #[must_use]
    pub fn matches_type(&self, type_name: &str) -> bool {
        match self.expected_type_name.as_deref() {
            Some(expected) => expected == type_name,
            None => true,
        }
    }

    /// Checks the observed exception message against the expectation.
    ///
    /// Matches when the spec does not constrain the message, or when the
    /// comparison selected by [`MatchMode`] succeeds. Messages are compared
    /// literally: an empty expected text always matches under `Contains` and
    /// `StartsWith`, and only an empty observed message under `Exact`.
    ///
    /// A `Regex` pattern that fails to parse here is a misconfiguration that
    /// [`ExpectationSpecBuilder::build`] would have rejected; it is treated as
    /// "no match" and logged.
    #[must_use]
    pub fn matches_message(&self, message: &str) -> bool {
        let expected = match self.expected_message.as_deref() {
            Some(expected) => expected,
            None => return true,
        };

        match self.match_mode {
            MatchMode::Exact => message == expected,
            MatchMode::Contains => message.contains(expected),
            MatchMode::StartsWith => message.starts_with(expected),
            MatchMode::Regex => match Regex::new(expected) {
                Ok(pattern) => pattern.is_match(message),
                Err(err) => {
                    log::warn!("Malformed message pattern `{}`: {}", expected, err);
                    false
                }
            },
        }
    }
}

/// Builder for [`ExpectationSpec`].
///
/// [`build`](ExpectationSpecBuilder::build) validates the configuration and
/// fails fast on a `Regex`-mode pattern that does not parse, so a broken
/// expectation surfaces at setup time rather than as a silent "no match" while
/// the test runs.
#[derive(Debug, Clone, Default)]
pub struct ExpectationSpecBuilder {
    expected_type_name: Option<String>,
    expected_message: Option<String>,
    match_mode: MatchMode,
    user_message: Option<String>,
}

impl ExpectationSpecBuilder {
    /// Requires the thrown exception to have exactly this fully qualified type name
    #[must_use]
    pub fn expected_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.expected_type_name = Some(type_name.into());
        self
    }

    /// Requires the thrown exception's message to match this text under the
    /// configured [`MatchMode`]
    #[must_use]
    pub fn expected_message(mut self, message: impl Into<String>) -> Self {
        self.expected_message = Some(message.into());
        self
    }

    /// Selects how the expected message is compared. Defaults to
    /// [`MatchMode::Exact`].
    #[must_use]
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Prefixes every diagnostic the verifier produces with this text
    #[must_use]
    pub fn user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    /// Validates the configuration and produces the immutable spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] when the mode is
    /// [`MatchMode::Regex`] and the expected message does not parse as a
    /// regular expression.
    pub fn build(self) -> Result<ExpectationSpec> {
        if self.match_mode == MatchMode::Regex {
            if let Some(pattern) = self.expected_message.as_deref() {
                if let Err(source) = Regex::new(pattern) {
                    return Err(Error::MalformedPattern {
                        pattern: pattern.to_string(),
                        source,
                    });
                }
            }
        }

        Ok(ExpectationSpec {
            expected_type_name: self.expected_type_name,
            expected_message: self.expected_message,
            match_mode: self.match_mode,
            user_message: self.user_message,
        })
    }
}
