//! Ordered first-match dispatch.

use crate::builder::BuildError;
use crate::chain::error::ChainError;
use crate::chain::handler::Handler;
use std::fmt::{self, Debug};

pub(crate) type BoxedHandler<R, O> = Box<dyn Handler<R, Output = O> + Send + Sync>;

/// Outcome of a handled request.
#[derive(Clone, Debug, PartialEq)]
pub struct Handled<O> {
    /// Name of the handler that accepted the request.
    pub handler: String,
    /// Zero-based position of that handler in the chain.
    pub position: usize,
    pub output: O,
}

/// Ordered sequence of handlers.
///
/// The chain owns its handlers in a `Vec`; the "next" handler is simply the
/// following element, so a chain cannot loop back on itself.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::ChainBuilder;
/// use statecraft::chain::ChainError;
///
/// let chain = ChainBuilder::new()
///     .link("Small", |n: &u32| *n < 10, |n: &u32| n * 2)
///     .link("Medium", |n: &u32| *n < 100, |n: &u32| n + 1)
///     .build()
///     .unwrap();
///
/// let handled = chain.handle(&50).unwrap();
/// assert_eq!(handled.handler, "Medium");
/// assert_eq!(handled.output, 51);
///
/// assert!(matches!(
///     chain.handle(&500),
///     Err(ChainError::UnhandledRequest { handlers: 2, .. })
/// ));
/// ```
pub struct HandlerChain<R, O> {
    handlers: Vec<BoxedHandler<R, O>>,
}

impl<R, O> Default for HandlerChain<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O> HandlerChain<R, O> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler at the end of the chain.
    ///
    /// Fails if the handler's name is blank or already used in the chain.
    pub fn push<H>(&mut self, handler: H) -> Result<(), BuildError>
    where
        H: Handler<R, Output = O> + Send + Sync + 'static,
    {
        self.push_boxed(Box::new(handler))
    }

    pub(crate) fn push_boxed(&mut self, handler: BoxedHandler<R, O>) -> Result<(), BuildError> {
        let name = handler.name().trim();
        if name.is_empty() {
            return Err(BuildError::UnnamedHandler {
                position: self.handlers.len(),
            });
        }
        if self.handlers.iter().any(|h| h.name().trim() == name) {
            return Err(BuildError::DuplicateHandler {
                name: name.to_string(),
            });
        }
        self.handlers.push(handler);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names, first to last.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Name of the handler that would accept `request`, without running
    /// any action.
    pub fn route(&self, request: &R) -> Option<&str> {
        self.handlers
            .iter()
            .find(|h| h.accepts(request))
            .map(|h| h.name())
    }
}

impl<R: Debug, O> HandlerChain<R, O> {
    /// Pass `request` along the chain until a handler accepts it.
    ///
    /// Only the first accepting handler runs its action; later handlers are
    /// never consulted.
    pub fn handle(&self, request: &R) -> Result<Handled<O>, ChainError> {
        for (position, handler) in self.handlers.iter().enumerate() {
            if !handler.accepts(request) {
                tracing::debug!(
                    handler = handler.name(),
                    position,
                    "handler declined request {:?}, forwarding",
                    request
                );
                continue;
            }

            tracing::info!(handler = handler.name(), position, "handling request {:?}", request);
            return Ok(Handled {
                handler: handler.name().to_string(),
                position,
                output: handler.process(request),
            });
        }

        tracing::warn!(handlers = self.handlers.len(), "request {:?} left unhandled", request);
        Err(ChainError::UnhandledRequest {
            request: format!("{request:?}"),
            handlers: self.handlers.len(),
        })
    }
}

impl<R, O> Debug for HandlerChain<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.names())
            .finish()
    }
}
