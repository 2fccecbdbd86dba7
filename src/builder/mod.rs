//! Builder API for handler chains and state enums.
//!
//! `ChainBuilder` assembles a [`HandlerChain`](crate::chain::HandlerChain)
//! and validates it before handing it out; `state_enum!` removes the
//! boilerplate of implementing [`State`](crate::core::State).

pub mod chain;
pub mod error;
pub mod macros;

pub use chain::ChainBuilder;
pub use error::BuildError;
