use std::fmt;

use strum::{EnumCount, EnumIter};

/// The comparison strategy applied to an observed exception's message.
///
/// An expectation that constrains the message text picks one of these modes;
/// when no mode is given, [`MatchMode::Exact`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum MatchMode {
    /// The observed message must equal the expected text exactly.
    #[default]
    Exact,
    /// The observed message must contain the expected text as a substring.
    Contains,
    /// The observed message must begin with the expected text.
    StartsWith,
    /// The expected text is a regular expression searched against the observed
    /// message.
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchMode::Exact => "Exact",
            MatchMode::Contains => "Contains",
            MatchMode::StartsWith => "StartsWith",
            MatchMode::Regex => "Regex",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mode_default_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", MatchMode::Exact), "Exact");
        assert_eq!(format!("{}", MatchMode::Contains), "Contains");
        assert_eq!(format!("{}", MatchMode::StartsWith), "StartsWith");
        assert_eq!(format!("{}", MatchMode::Regex), "Regex");
    }

    #[test]
    fn test_mode_count() {
        assert_eq!(MatchMode::COUNT, 4);
        assert_eq!(MatchMode::iter().count(), MatchMode::COUNT);
    }
}
