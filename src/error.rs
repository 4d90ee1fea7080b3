use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the configuration failures that can occur while setting up an
/// exception expectation. Mismatches observed while a test actually runs are never
/// reported through this type: they are recorded on the
/// [`TestOutcome`](crate::TestOutcome), and a defective user handler propagates as a
/// [`Thrown`](crate::Thrown) value instead.
///
/// # Examples
///
/// ```rust
/// use throwspec::{Error, ExpectationSpec, MatchMode};
///
/// let result = ExpectationSpec::builder()
///     .expected_message("[unclosed")
///     .match_mode(MatchMode::Regex)
///     .build();
///
/// match result {
///     Ok(spec) => println!("expectation ready: {:?}", spec),
///     Err(Error::MalformedPattern { pattern, .. }) => {
///         eprintln!("bad pattern: {}", pattern);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The expected-message text is not a valid pattern.
    ///
    /// This error occurs when an expectation uses [`MatchMode::Regex`](crate::MatchMode)
    /// and the supplied `expected_message` does not parse as a regular expression.
    /// It is raised at configuration time by
    /// [`ExpectationSpecBuilder::build`](crate::ExpectationSpecBuilder::build), so a
    /// misconfigured test is visible before anything runs.
    ///
    /// # Fields
    ///
    /// * `pattern` - The pattern text exactly as supplied in the expectation
    /// * `source` - The underlying parse failure from the regex engine
    #[error("Malformed message pattern `{pattern}`: {source}")]
    MalformedPattern {
        /// The pattern text exactly as supplied in the expectation
        pattern: String,
        /// The underlying parse failure from the regex engine
        source: regex::Error,
    },
}
