use std::fmt;

use crate::thrown::AbortSignal;

/// How a [`Thrown`] value entered the pipeline.
#[derive(Debug, Clone, Default)]
pub enum ThrownKind {
    /// Raised directly by the code under test.
    #[default]
    Direct,
    /// An infrastructure wrapper used by the pipeline to convey an internal
    /// failure; the true cause sits one level down.
    InternalWrapper,
    /// A cooperative abort raised by the host against the running worker.
    HostAbort(AbortSignal),
}

/// An exception observed during one run, captured as a plain value.
///
/// The pipeline does not rely on unwinding to classify failures: an execution
/// unit that "throws" returns a `Thrown` through its error channel instead. The
/// value carries everything classification needs - the fully qualified type name
/// of the exception, its message, an optional captured stack trace, and an
/// optional inner cause for wrapped failures.
///
/// A `Thrown` is ephemeral: it lives only for the duration of one verification
/// call and is consumed by whichever layer turns it into a
/// [`TestOutcome`](crate::TestOutcome) verdict.
///
/// # Examples
///
/// ```rust
/// use throwspec::Thrown;
///
/// let thrown = Thrown::new("System.ArgumentException", "bad argument")
///     .with_stack_trace("at Lib.Parse()");
///
/// assert_eq!(thrown.type_name(), "System.ArgumentException");
/// assert_eq!(format!("{}", thrown), "System.ArgumentException : bad argument");
/// ```
#[derive(Debug, Clone)]
pub struct Thrown {
    type_name: String,
    message: String,
    stack_trace: Option<String>,
    cause: Option<Box<Thrown>>,
    kind: ThrownKind,
}

impl Thrown {
    /// Creates an exception value raised directly by the code under test
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Thrown {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
            cause: None,
            kind: ThrownKind::Direct,
        }
    }

    /// Creates an infrastructure wrapper around `cause`.
    ///
    /// `type_name` is the host's own wrapper exception type; the wrapped `cause`
    /// is what classification will actually see after unwrapping.
    #[must_use]
    pub fn internal_wrapper(
        type_name: impl Into<String>,
        message: impl Into<String>,
        cause: Thrown,
    ) -> Self {
        Thrown {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
            cause: Some(Box::new(cause)),
            kind: ThrownKind::InternalWrapper,
        }
    }

    /// Creates a host-abort exception carrying the signal that must be
    /// acknowledged before classification
    #[must_use]
    pub fn host_abort(
        type_name: impl Into<String>,
        message: impl Into<String>,
        signal: AbortSignal,
    ) -> Self {
        Thrown {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
            cause: None,
            kind: ThrownKind::HostAbort(signal),
        }
    }

    /// Attaches a captured stack trace
    #[must_use]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Attaches an inner cause without changing the kind
    #[must_use]
    pub fn with_cause(mut self, cause: Thrown) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the fully qualified type name of the exception
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the exception message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured stack trace, if any was recorded
    #[must_use]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Returns the inner cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&Thrown> {
        self.cause.as_deref()
    }

    /// Returns how this value entered the pipeline
    #[must_use]
    pub fn kind(&self) -> &ThrownKind {
        &self.kind
    }

    /// Returns true if this value is the pipeline's own infrastructure wrapper
    #[must_use]
    pub fn is_internal_wrapper(&self) -> bool {
        matches!(self.kind, ThrownKind::InternalWrapper)
    }

    /// Returns true if this value carries a host abort
    #[must_use]
    pub fn is_host_abort(&self) -> bool {
        matches!(self.kind, ThrownKind::HostAbort(_))
    }

    /// Consumes at most one [`ThrownKind::InternalWrapper`] layer, yielding the
    /// true cause.
    ///
    /// The unwrap is fixed at a single level: a wrapper whose cause is itself a
    /// wrapper yields that inner wrapper as-is. A wrapper with no recorded cause
    /// is returned unchanged rather than invented around.
    #[must_use]
    pub fn unwrap_internal(mut self) -> Thrown {
        if self.is_internal_wrapper() {
            if let Some(cause) = self.cause.take() {
                return *cause;
            }
        }
        self
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.type_name, self.message)
    }
}
