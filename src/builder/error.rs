//! Build errors for handler chains.

use thiserror::Error;

/// Errors that can occur when building a handler chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No handlers defined. Add at least one handler before .build()")]
    EmptyChain,

    #[error("Handler at position {position} has an empty name")]
    UnnamedHandler { position: usize },

    #[error("Handler name '{name}' is used more than once")]
    DuplicateHandler { name: String },
}
