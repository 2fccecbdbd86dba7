//! Builder for constructing handler chains.

use crate::builder::error::BuildError;
use crate::chain::{BoxedHandler, FnHandler, Handler, HandlerChain};
use crate::core::Guard;

/// Builder for handler chains with a fluent API.
///
/// Handlers are consulted in the order they are added.
pub struct ChainBuilder<R, O> {
    handlers: Vec<BoxedHandler<R, O>>,
}

impl<R: 'static, O: 'static> ChainBuilder<R, O> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append any [`Handler`] implementation.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, Output = O> + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Append several handlers of one type.
    pub fn handlers<H, I>(mut self, handlers: I) -> Self
    where
        H: Handler<R, Output = O> + Send + Sync + 'static,
        I: IntoIterator<Item = H>,
    {
        for handler in handlers {
            self.handlers.push(Box::new(handler));
        }
        self
    }

    /// Append a handler made of a predicate and an action.
    pub fn link<P, A>(self, name: impl Into<String>, predicate: P, action: A) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
        A: Fn(&R) -> O + Send + Sync + 'static,
    {
        self.handler(FnHandler::new(name, Guard::new(predicate), action))
    }

    /// Build the chain.
    /// Returns an error if the chain is empty or a handler name is blank or
    /// repeated.
    pub fn build(self) -> Result<HandlerChain<R, O>, BuildError> {
        if self.handlers.is_empty() {
            return Err(BuildError::EmptyChain);
        }

        let mut chain = HandlerChain::new();
        for handler in self.handlers {
            chain.push_boxed(handler)?;
        }
        Ok(chain)
    }
}

impl<R: 'static, O: 'static> Default for ChainBuilder<R, O> {
    fn default() -> Self {
        Self::new()
    }
}
