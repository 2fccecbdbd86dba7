//! Chain of responsibility.
//!
//! A request travels through an ordered list of handlers. The first handler
//! whose predicate accepts it processes it; the rest are never consulted.
//! A request no handler accepts is an error, not a silent drop.

mod dispatch;
mod error;
mod handler;

pub(crate) use dispatch::BoxedHandler;
pub use dispatch::{Handled, HandlerChain};
pub use error::ChainError;
pub use handler::{FnHandler, Handler, HandlerAction};
