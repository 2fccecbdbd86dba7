//! Bank account state machine.
//!
//! An account is always in exactly one [`AccountState`]. Deposits and
//! withdrawals dispatch on that state and may move the account to another
//! one; `Closed` has no way out.

mod error;
mod machine;
mod state;

pub use error::AccountError;
pub use machine::{Account, AccountEvent, AccountMemento};
pub use state::{AccountState, OperationKind};
