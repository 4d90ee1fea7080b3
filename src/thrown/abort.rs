use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A cooperative-cancellation handle shared between the host and a running unit.
///
/// When the host decides to abort a worker it raises the signal and surfaces the
/// abort to the pipeline as a [`Thrown`](crate::Thrown) value of kind
/// [`ThrownKind::HostAbort`](crate::ThrownKind). The verifier acknowledges the
/// signal before classifying, so that handling the abort like an ordinary
/// exception does not leave the process in a half-cancelled state.
///
/// Cloning produces another handle to the same underlying flag.
///
/// # Examples
///
/// ```rust
/// use throwspec::AbortSignal;
///
/// let signal = AbortSignal::new();
/// signal.raise();
/// assert!(signal.is_pending());
///
/// signal.acknowledge();
/// assert!(!signal.is_pending());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    pending: Arc<AtomicBool>,
}

impl AbortSignal {
    /// Creates a new signal in the not-pending state
    #[must_use]
    pub fn new() -> Self {
        AbortSignal::default()
    }

    /// Marks the abort as requested. Called by the host.
    pub fn raise(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }

    /// Returns true while an abort has been raised but not yet acknowledged
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Clears the pending abort. Called by the verifier before classification.
    pub fn acknowledge(&self) {
        self.pending.store(false, Ordering::SeqCst);
    }
}
