use std::collections::HashMap;

use crate::{thrown::Thrown, verify::unit::TestSubject};

/// The exception-handling capability a test subject may expose.
///
/// When a thrown exception matches its expectation, the verifier gives the
/// subject one chance to run custom post-checks against the exception value.
/// Returning `Err` from here is a handler-invocation fault: the verifier does
/// not soften it into a mismatch, it propagates out of the verification call
/// unchanged so a defective handler is visible as a hard failure.
pub trait ExceptionHandler {
    /// Inspects a matched exception.
    ///
    /// # Errors
    ///
    /// Returns a [`Thrown`] value when the handler itself fails; the verifier
    /// propagates it to the caller as-is.
    fn handle_exception(&mut self, thrown: &Thrown) -> Result<(), Thrown>;
}

/// A pre-resolved handler callback bound to a subject type at setup time.
///
/// The callback receives the subject the test ran against and the matched
/// exception value; an `Err` is a handler-invocation fault and propagates
/// unchanged.
pub type HandlerFn = Box<dyn Fn(&mut dyn TestSubject, &Thrown) -> Result<(), Thrown> + Send + Sync>;

/// Lookup of pre-resolved exception handlers by subject type.
///
/// The discovery layer resolves handler methods once, at setup time, and
/// registers them against the fixture's fully qualified type name; the verifier
/// consults this resolver before falling back to the subject's own
/// [`ExceptionHandler`] capability.
pub trait HandlerResolver {
    /// Returns the handler bound to `subject_type`, if one was registered
    fn find_handler(&self, subject_type: &str) -> Option<&HandlerFn>;
}

/// A resolver that never finds a handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl HandlerResolver for NullResolver {
    fn find_handler(&self, _subject_type: &str) -> Option<&HandlerFn> {
        None
    }
}

/// The standard [`HandlerResolver`], a map from subject type name to callback.
///
/// # Examples
///
/// ```rust
/// use throwspec::prelude::*;
///
/// let mut registry = HandlerRegistry::new();
/// registry.register("Tests.ParserFixture", Box::new(|_subject, thrown| {
///     assert!(!thrown.message().is_empty());
///     Ok(())
/// }));
///
/// assert!(registry.find_handler("Tests.ParserFixture").is_some());
/// assert!(registry.find_handler("Tests.OtherFixture").is_none());
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerFn>,
}

impl HandlerRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        HandlerRegistry::default()
    }

    /// Binds `handler` to the given subject type name, replacing any previous
    /// binding for that type
    pub fn register(&mut self, subject_type: impl Into<String>, handler: HandlerFn) {
        self.handlers.insert(subject_type.into(), handler);
    }

    /// Returns the number of registered handlers
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HandlerResolver for HandlerRegistry {
    fn find_handler(&self, subject_type: &str) -> Option<&HandlerFn> {
        self.handlers.get(subject_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_resolver_finds_nothing() {
        let resolver = NullResolver;
        assert!(resolver.find_handler("Tests.Anything").is_none());
    }

    #[test]
    fn test_registry_register_and_find() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.is_empty());

        registry.register("Tests.Fixture", Box::new(|_, _| Ok(())));
        assert_eq!(registry.len(), 1);
        assert!(registry.find_handler("Tests.Fixture").is_some());
        assert!(registry.find_handler("Tests.Other").is_none());
    }

    #[test]
    fn test_registry_register_replaces_binding() {
        let mut registry = HandlerRegistry::new();
        registry.register("Tests.Fixture", Box::new(|_, _| Ok(())));
        registry.register(
            "Tests.Fixture",
            Box::new(|_, thrown| Err(thrown.clone())),
        );
        assert_eq!(registry.len(), 1);

        struct Dummy;
        impl TestSubject for Dummy {
            fn type_name(&self) -> &str {
                "Tests.Fixture"
            }
        }

        let handler = registry.find_handler("Tests.Fixture").unwrap();
        let thrown = Thrown::new("Foo", "x");
        assert!(handler(&mut Dummy, &thrown).is_err());
    }
}
