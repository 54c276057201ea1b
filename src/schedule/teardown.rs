/// RAII guard pairing one host-side registration with its release.
///
/// Wraps the unsubscribe half of a scroll listener, frame callback, or
/// observer registration. The release runs exactly once: either explicitly
/// via [`Teardown::run`] or on drop, so a registration cannot outlive its
/// owner even on early-exit paths.
pub struct Teardown(Option<Box<dyn FnOnce()>>);

impl Teardown {
    /// Wrap a release closure.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    /// A guard that releases nothing.
    pub fn noop() -> Self {
        Self(None)
    }

    /// Run the release now instead of at drop. Idempotent.
    pub fn run(mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Teardown")
            .field(&self.0.as_ref().map(|_| "pending"))
            .finish()
    }
}

/// A set of teardown guards released together.
///
/// Bindings collect one guard per subscription they create and dispose the
/// whole set when the owning view is destroyed; dropping the set has the same
/// effect, so leaked listeners across remounts are impossible.
#[derive(Debug, Default)]
pub struct Subscriptions {
    guards: Vec<Teardown>,
}

impl Subscriptions {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one more registration.
    pub fn push(&mut self, guard: Teardown) {
        self.guards.push(guard);
    }

    /// Release every tracked registration, newest first.
    pub fn dispose(&mut self) {
        while let Some(guard) = self.guards.pop() {
            guard.run();
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the set holds no registrations.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}
