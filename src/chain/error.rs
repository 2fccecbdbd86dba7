//! Handler chain errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Every handler declined the request.
    #[error("no handler accepted request {request} ({handlers} handler(s) consulted)")]
    UnhandledRequest { request: String, handlers: usize },
}
