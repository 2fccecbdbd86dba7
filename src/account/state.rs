//! Account states and the operations dispatched on them.

use serde::{Deserialize, Serialize};
use std::fmt;

crate::state_enum! {
    /// Behavioural mode of an [`Account`](super::Account).
    ///
    /// `Active` is initial. `Overdrawn` blocks withdrawals until the
    /// balance is back at zero or above. `Closed` is terminal.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum AccountState {
        #[default]
        Active,
        Overdrawn,
        Closed,
    }
    final: [Closed]
    error: [Overdrawn]
}

/// Operations an account can be asked to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Deposit,
    Withdraw,
    Close,
    Restore,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
            OperationKind::Close => "close",
            OperationKind::Restore => "restore",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn closed_is_the_only_terminal_state() {
        let terminal: Vec<_> = AccountState::ALL.iter().filter(|s| s.is_final()).collect();
        assert_eq!(terminal, [&AccountState::Closed]);
    }

    #[test]
    fn overdrawn_is_restricting() {
        assert!(AccountState::Overdrawn.is_error());
        assert!(!AccountState::Active.is_error());
    }

    #[test]
    fn initial_state_is_active() {
        assert_eq!(AccountState::default(), AccountState::Active);
    }

    #[test]
    fn operation_names() {
        assert_eq!(OperationKind::Withdraw.to_string(), "withdraw");
        assert_eq!(
            serde_json::to_string(&OperationKind::Restore).unwrap(),
            "\"restore\""
        );
    }
}
