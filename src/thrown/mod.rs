//! Observed exceptions as tagged values.
//!
//! The pipeline never classifies failures by catching an unwinding panic.
//! Instead, a unit that "throws" hands back a [`Thrown`] value through its error
//! channel: a record of the exception's fully qualified type name, message,
//! optional stack trace, and optional inner cause. [`ThrownKind`] tags the two
//! special origins the verifier has to treat differently before classification:
//!
//! - [`ThrownKind::InternalWrapper`] - the pipeline's own infrastructure
//!   exception carrying the true cause one level down; unwrapped exactly once
//! - [`ThrownKind::HostAbort`] - a cooperative abort from the host, carrying an
//!   [`AbortSignal`] that must be acknowledged so the process is not left
//!   half-cancelled
//!
//! # Examples
//!
//! ```rust
//! use throwspec::Thrown;
//!
//! let cause = Thrown::new("System.ArgumentException", "bad argument");
//! let wrapper = Thrown::internal_wrapper("Pipeline.InternalException", "rethrown", cause);
//!
//! let seen = wrapper.unwrap_internal();
//! assert_eq!(seen.type_name(), "System.ArgumentException");
//! ```

mod abort;
mod value;

pub use abort::AbortSignal;
pub use value::{Thrown, ThrownKind};
