//! Account errors. Every variant leaves the account unchanged.

use super::state::{AccountState, OperationKind};
use crate::money::Money;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The current state does not allow the operation.
    #[error("cannot {operation} while account is {state}")]
    InvalidStateOperation {
        state: AccountState,
        operation: OperationKind,
    },

    #[error("{operation} amount must be positive, got {amount}")]
    InvalidAmount {
        operation: OperationKind,
        amount: Money,
    },

    #[error("opening balance cannot be negative, got {0}")]
    NegativeOpeningBalance(Money),

    #[error("{operation} of {amount} would overflow the balance")]
    BalanceOverflow {
        operation: OperationKind,
        amount: Money,
    },

    #[error("cannot restore a {state} account holding {balance}")]
    InconsistentMemento { state: AccountState, balance: Money },
}
