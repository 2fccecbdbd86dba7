//! The handler capability and a closure-backed implementation.

use crate::core::Guard;
use std::fmt;
use std::sync::Arc;

/// A link in a handler chain.
///
/// A handler inspects a request with [`accepts`](Handler::accepts). If it
/// accepts, the chain calls [`process`](Handler::process) and stops;
/// otherwise the request moves on to the next handler.
pub trait Handler<R> {
    type Output;

    fn name(&self) -> &str;

    /// Must be pure. The chain may call it without processing, e.g. from
    /// [`HandlerChain::route`](crate::chain::HandlerChain::route).
    fn accepts(&self, request: &R) -> bool;

    fn process(&self, request: &R) -> Self::Output;
}

pub type HandlerAction<R, O> = Arc<dyn Fn(&R) -> O + Send + Sync>;

/// Handler built from a name, a guard and an action.
///
/// # Example
///
/// ```rust
/// use statecraft::chain::{FnHandler, Handler};
/// use statecraft::core::Guard;
///
/// let manager = FnHandler::new(
///     "Manager",
///     Guard::new(|amount: &i64| *amount <= 1000),
///     |amount: &i64| format!("Manager approved {amount}"),
/// );
///
/// assert!(manager.accepts(&500));
/// assert_eq!(manager.process(&500), "Manager approved 500");
/// ```
pub struct FnHandler<R, O> {
    name: String,
    guard: Guard<R>,
    action: HandlerAction<R, O>,
}

impl<R: 'static, O> FnHandler<R, O> {
    pub fn new<F>(name: impl Into<String>, guard: Guard<R>, action: F) -> Self
    where
        F: Fn(&R) -> O + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            guard,
            action: Arc::new(action),
        }
    }
}

impl<R, O> Handler<R> for FnHandler<R, O> {
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, request: &R) -> bool {
        self.guard.check(request)
    }

    fn process(&self, request: &R) -> O {
        (self.action)(request)
    }
}

impl<R, O> fmt::Debug for FnHandler<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_handler_delegates_to_guard_and_action() {
        let handler = FnHandler::new("Even", Guard::new(|n: &u32| n % 2 == 0), |n: &u32| n / 2);

        assert_eq!(handler.name(), "Even");
        assert!(handler.accepts(&4));
        assert!(!handler.accepts(&5));
        assert_eq!(handler.process(&4), 2);
    }

    #[test]
    fn debug_shows_name() {
        let handler = FnHandler::new("Any", Guard::always(), |_: &u8| ());
        assert!(format!("{handler:?}").contains("Any"));
    }
}
