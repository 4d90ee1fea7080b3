//! Declarative exception expectations.
//!
//! An [`ExpectationSpec`] describes the exception one test unit is required to
//! throw: an optional fully qualified type name, an optional message constraint
//! compared under a [`MatchMode`], and an optional user message prefixed to
//! diagnostics. Specs are immutable once built and are read-only input to the
//! verifier.
//!
//! Construction goes through [`ExpectationSpec::any`],
//! [`ExpectationSpec::of_type`], or the validating
//! [`ExpectationSpecBuilder`], which rejects malformed `Regex` patterns at
//! setup time.
//!
//! # Examples
//!
//! ```rust
//! use throwspec::{ExpectationSpec, MatchMode};
//!
//! let spec = ExpectationSpec::builder()
//!     .expected_message("out of range")
//!     .match_mode(MatchMode::Contains)
//!     .build()?;
//!
//! assert!(spec.matches_message("index 9 out of range (len 4)"));
//! # Ok::<(), throwspec::Error>(())
//! ```

mod mode;
mod spec;

pub use mode::MatchMode;
pub use spec::{ExpectationSpec, ExpectationSpecBuilder};
