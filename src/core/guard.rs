//! Pure predicates.
//!
//! A `Guard` decides whether a value is accepted: a handler uses one to
//! test whether a request falls in its range. Guards carry no state and
//! have no side effects.

/// Boxed, thread-safe predicate over `T`.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Guard;
///
/// let small = Guard::new(|amount: &i64| *amount <= 1000);
/// let positive = Guard::new(|amount: &i64| *amount > 0);
/// let payable = small.and(positive);
///
/// assert!(payable.check(&500));
/// assert!(!payable.check(&1500));
/// assert!(!payable.check(&-3));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: 'static> Guard<T> {
    /// Wrap a predicate. The closure must be deterministic.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that accepts everything.
    pub fn always() -> Self {
        Guard::new(|_| true)
    }

    /// Accept only when both guards accept. `other` is not evaluated when
    /// `self` rejects.
    pub fn and(self, other: Guard<T>) -> Self {
        Guard::new(move |value| self.check(value) && other.check(value))
    }

    /// Invert the guard.
    pub fn negate(self) -> Self {
        Guard::new(move |value| !self.check(value))
    }
}

impl<T> Guard<T> {
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
