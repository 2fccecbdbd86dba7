//! Building blocks shared by the chain, account and history modules.
//!
//! - `State`: behavioural modes of an entity
//! - `Guard`: pure predicates
//! - `StateHistory`: immutable log of state transitions
//! - `Snapshot` / `HistoryStack` / `Originator`: saved states and their history

mod guard;
mod history;
mod snapshot;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use snapshot::{HistoryError, HistoryStack, Originator, Snapshot};
pub use state::State;
