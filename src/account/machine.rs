//! The account state machine.
//!
//! Dispatch is split in two: [`plan`] is a pure function of the current
//! state, balance and requested movement, and [`Account`] applies the plan
//! it returns. A rejected plan never touches the account.

use super::error::AccountError;
use super::state::{AccountState, OperationKind};
use crate::core::{Originator, StateHistory, StateTransition};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Something an account operation did, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    StateChanged { from: AccountState, to: AccountState },
    Deposited { amount: Money, balance: Money },
    Withdrew { amount: Money, balance: Money },
}

impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEvent::Deposited { amount, balance } => {
                write!(f, "Deposited {amount}. Balance: {balance}")
            }
            AccountEvent::Withdrew { amount, balance } => {
                write!(f, "Withdrew {amount}. Balance: {balance}")
            }
            AccountEvent::StateChanged { to, .. } => match to {
                AccountState::Overdrawn => f.write_str("Overdrawn! Moving to Overdrawn state."),
                AccountState::Active => f.write_str("Account is Active again."),
                AccountState::Closed => f.write_str("Account has been closed."),
            },
        }
    }
}

/// Balance and state captured for later restoration.
///
/// Only [`Account::memento`] creates one, so a memento always pairs a
/// balance with the state the account held it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccountMemento {
    balance: Money,
    state: AccountState,
}

impl AccountMemento {
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    /// Active never holds a negative balance and Overdrawn always does.
    fn is_consistent(&self) -> bool {
        match self.state {
            AccountState::Active => !self.balance.is_negative(),
            AccountState::Overdrawn => self.balance.is_negative(),
            AccountState::Closed => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Movement {
    Deposit(Money),
    Withdraw(Money),
}

impl Movement {
    fn kind(self) -> OperationKind {
        match self {
            Movement::Deposit(_) => OperationKind::Deposit,
            Movement::Withdraw(_) => OperationKind::Withdraw,
        }
    }

    fn amount(self) -> Money {
        match self {
            Movement::Deposit(amount) | Movement::Withdraw(amount) => amount,
        }
    }
}

#[derive(Debug, PartialEq)]
struct Plan {
    balance: Money,
    state: AccountState,
    events: Vec<AccountEvent>,
}

/// Decide what `movement` does to an account in `state` holding `balance`.
fn plan(state: AccountState, balance: Money, movement: Movement) -> Result<Plan, AccountError> {
    let operation = movement.kind();
    let rejected = AccountError::InvalidStateOperation { state, operation };

    if matches!(
        (state, movement),
        (AccountState::Closed, _) | (AccountState::Overdrawn, Movement::Withdraw(_))
    ) {
        return Err(rejected);
    }

    let amount = movement.amount();
    if !amount.is_positive() {
        return Err(AccountError::InvalidAmount { operation, amount });
    }
    let overflow = AccountError::BalanceOverflow { operation, amount };

    match (state, movement) {
        (AccountState::Active, Movement::Deposit(amount)) => {
            let balance = balance.checked_add(amount).ok_or(overflow)?;
            Ok(Plan {
                balance,
                state,
                events: vec![AccountEvent::Deposited { amount, balance }],
            })
        }
        (AccountState::Overdrawn, Movement::Deposit(amount)) => {
            let balance = balance.checked_add(amount).ok_or(overflow)?;
            let mut events = vec![AccountEvent::Deposited { amount, balance }];
            let state = if balance.is_negative() {
                state
            } else {
                events.push(AccountEvent::StateChanged {
                    from: state,
                    to: AccountState::Active,
                });
                AccountState::Active
            };
            Ok(Plan {
                balance,
                state,
                events,
            })
        }
        (AccountState::Active, Movement::Withdraw(amount)) => {
            let balance = balance.checked_sub(amount).ok_or(overflow)?;
            let mut events = Vec::with_capacity(2);
            let state = if balance.is_negative() {
                events.push(AccountEvent::StateChanged {
                    from: state,
                    to: AccountState::Overdrawn,
                });
                AccountState::Overdrawn
            } else {
                state
            };
            events.push(AccountEvent::Withdrew { amount, balance });
            Ok(Plan {
                balance,
                state,
                events,
            })
        }
        (AccountState::Closed, _) | (AccountState::Overdrawn, Movement::Withdraw(_)) => {
            Err(rejected)
        }
    }
}

/// Bank account whose behaviour follows its [`AccountState`].
///
/// The balance changes only through [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw). Every state change is recorded in the
/// account's transition log.
///
/// # Example
///
/// ```rust
/// use statecraft::account::{Account, AccountState};
/// use statecraft::Money;
///
/// let mut account = Account::open(Money::new(100))?;
///
/// account.withdraw(Money::new(150))?;
/// assert_eq!(account.state(), AccountState::Overdrawn);
/// assert_eq!(account.balance(), Money::new(-50));
///
/// account.deposit(Money::new(100))?;
/// assert_eq!(account.state(), AccountState::Active);
/// assert_eq!(account.balance(), Money::new(50));
///
/// account.close();
/// assert!(account.deposit(Money::new(50)).is_err());
/// # Ok::<(), statecraft::account::AccountError>(())
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct Account {
    id: Uuid,
    balance: Money,
    state: AccountState,
    transitions: StateHistory<AccountState>,
}

impl Account {
    /// Open an `Active` account. A negative opening balance is rejected.
    pub fn open(opening_balance: Money) -> Result<Self, AccountError> {
        if opening_balance.is_negative() {
            return Err(AccountError::NegativeOpeningBalance(opening_balance));
        }
        let account = Self {
            id: Uuid::new_v4(),
            balance: opening_balance,
            state: AccountState::Active,
            transitions: StateHistory::new(),
        };
        tracing::debug!(account = %account.id, balance = %opening_balance, "account opened");
        Ok(account)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == AccountState::Closed
    }

    pub fn transitions(&self) -> &StateHistory<AccountState> {
        &self.transitions
    }

    /// Credit the account. Rejected while `Closed`. An overdrawn account
    /// returns to `Active` once the balance is zero or above.
    pub fn deposit(&mut self, amount: Money) -> Result<Vec<AccountEvent>, AccountError> {
        self.apply(Movement::Deposit(amount))
    }

    /// Debit the account. Rejected while `Overdrawn` or `Closed`. An
    /// `Active` account that goes below zero becomes `Overdrawn` first and
    /// is then debited.
    pub fn withdraw(&mut self, amount: Money) -> Result<Vec<AccountEvent>, AccountError> {
        self.apply(Movement::Withdraw(amount))
    }

    /// Move to `Closed` from any state. Closing a closed account does
    /// nothing and returns no events.
    pub fn close(&mut self) -> Vec<AccountEvent> {
        if self.is_closed() {
            return Vec::new();
        }
        vec![self.enter(AccountState::Closed, OperationKind::Close)]
    }

    fn apply(&mut self, movement: Movement) -> Result<Vec<AccountEvent>, AccountError> {
        let plan = plan(self.state, self.balance, movement).inspect_err(|err| {
            tracing::warn!(account = %self.id, state = %self.state, "{err}");
        })?;

        self.balance = plan.balance;
        for event in &plan.events {
            if let AccountEvent::StateChanged { to, .. } = event {
                self.enter(*to, movement.kind());
            }
        }
        tracing::debug!(
            account = %self.id,
            operation = %movement.kind(),
            balance = %self.balance,
            "movement applied"
        );
        Ok(plan.events)
    }

    fn enter(&mut self, to: AccountState, cause: OperationKind) -> AccountEvent {
        let from = self.state;
        self.transitions = self
            .transitions
            .record(StateTransition::now(from, to, cause.as_str()));
        self.state = to;
        tracing::info!(account = %self.id, %from, %to, %cause, "account state changed");
        AccountEvent::StateChanged { from, to }
    }
}

impl Originator for Account {
    type Memento = AccountMemento;
    type Error = AccountError;

    fn memento(&self) -> AccountMemento {
        AccountMemento {
            balance: self.balance,
            state: self.state,
        }
    }

    /// Reinstate a saved balance and state. A closed account stays closed,
    /// and a memento whose balance contradicts its state is refused.
    fn restore(&mut self, memento: &AccountMemento) -> Result<(), AccountError> {
        if self.is_closed() {
            return Err(AccountError::InvalidStateOperation {
                state: self.state,
                operation: OperationKind::Restore,
            });
        }
        if !memento.is_consistent() {
            return Err(AccountError::InconsistentMemento {
                state: memento.state,
                balance: memento.balance,
            });
        }
        self.balance = memento.balance;
        if memento.state != self.state {
            self.enter(memento.state, OperationKind::Restore);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(units: i64) -> Money {
        Money::new(units)
    }

    #[test]
    fn overdraft_moves_active_to_overdrawn() {
        let mut account = Account::open(money(100)).unwrap();

        let events = account.withdraw(money(150)).unwrap();

        assert_eq!(account.state(), AccountState::Overdrawn);
        assert_eq!(account.balance(), money(-50));
        assert_eq!(
            events,
            vec![
                AccountEvent::StateChanged {
                    from: AccountState::Active,
                    to: AccountState::Overdrawn,
                },
                AccountEvent::Withdrew {
                    amount: money(150),
                    balance: money(-50),
                },
            ]
        );
    }

    #[test]
    fn withdrawing_to_exactly_zero_stays_active() {
        let mut account = Account::open(money(100)).unwrap();

        account.withdraw(money(100)).unwrap();

        assert_eq!(account.state(), AccountState::Active);
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.transitions().is_empty());
    }

    #[test]
    fn deposit_clears_overdraft() {
        let mut account = Account::open(money(100)).unwrap();
        account.withdraw(money(150)).unwrap();

        let events = account.deposit(money(100)).unwrap();

        assert_eq!(account.state(), AccountState::Active);
        assert_eq!(account.balance(), money(50));
        assert_eq!(
            events,
            vec![
                AccountEvent::Deposited {
                    amount: money(100),
                    balance: money(50),
                },
                AccountEvent::StateChanged {
                    from: AccountState::Overdrawn,
                    to: AccountState::Active,
                },
            ]
        );
    }

    #[test]
    fn partial_deposit_keeps_overdraft() {
        let mut account = Account::open(Money::ZERO).unwrap();
        account.withdraw(money(80)).unwrap();

        account.deposit(money(30)).unwrap();

        assert_eq!(account.state(), AccountState::Overdrawn);
        assert_eq!(account.balance(), money(-50));
    }

    #[test]
    fn deposit_reaching_zero_reactivates() {
        let mut account = Account::open(Money::ZERO).unwrap();
        account.withdraw(money(20)).unwrap();

        account.deposit(money(20)).unwrap();

        assert_eq!(account.state(), AccountState::Active);
    }

    #[test]
    fn overdrawn_account_rejects_withdrawal() {
        let mut account = Account::open(money(10)).unwrap();
        account.withdraw(money(20)).unwrap();

        let err = account.withdraw(money(5)).unwrap_err();

        assert_eq!(
            err,
            AccountError::InvalidStateOperation {
                state: AccountState::Overdrawn,
                operation: OperationKind::Withdraw,
            }
        );
        assert_eq!(account.balance(), money(-10));
        assert_eq!(account.state(), AccountState::Overdrawn);
    }

    #[test]
    fn closed_account_rejects_everything() {
        let mut account = Account::open(money(100)).unwrap();
        account.close();

        let deposit = account.deposit(money(50));
        let withdraw = account.withdraw(money(50));

        assert!(matches!(
            deposit,
            Err(AccountError::InvalidStateOperation {
                state: AccountState::Closed,
                operation: OperationKind::Deposit,
            })
        ));
        assert!(matches!(
            withdraw,
            Err(AccountError::InvalidStateOperation {
                state: AccountState::Closed,
                operation: OperationKind::Withdraw,
            })
        ));
        assert_eq!(account.balance(), money(100));
        assert_eq!(account.state(), AccountState::Closed);
    }

    #[test]
    fn close_works_from_overdrawn_and_is_idempotent() {
        let mut account = Account::open(Money::ZERO).unwrap();
        account.withdraw(money(5)).unwrap();

        let first = account.close();
        let second = account.close();

        assert_eq!(
            first,
            vec![AccountEvent::StateChanged {
                from: AccountState::Overdrawn,
                to: AccountState::Closed,
            }]
        );
        assert!(second.is_empty());
        assert_eq!(account.transitions().len(), 2);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut account = Account::open(money(100)).unwrap();

        assert_eq!(
            account.deposit(Money::ZERO).unwrap_err(),
            AccountError::InvalidAmount {
                operation: OperationKind::Deposit,
                amount: Money::ZERO,
            }
        );
        assert!(matches!(
            account.withdraw(money(-5)),
            Err(AccountError::InvalidAmount { .. })
        ));
        assert_eq!(account.balance(), money(100));
    }

    #[test]
    fn state_check_precedes_amount_check() {
        let mut account = Account::open(money(1)).unwrap();
        account.close();

        assert!(matches!(
            account.deposit(money(-1)),
            Err(AccountError::InvalidStateOperation { .. })
        ));
    }

    #[test]
    fn overflow_is_rejected_without_change() {
        let mut account = Account::open(Money::new(i64::MAX)).unwrap();

        assert!(matches!(
            account.deposit(money(1)),
            Err(AccountError::BalanceOverflow { .. })
        ));
        assert_eq!(account.balance(), Money::new(i64::MAX));
    }

    #[test]
    fn negative_opening_balance_is_rejected() {
        assert_eq!(
            Account::open(money(-1)).unwrap_err(),
            AccountError::NegativeOpeningBalance(money(-1))
        );
    }

    #[test]
    fn transitions_are_logged_with_cause() {
        let mut account = Account::open(money(100)).unwrap();
        account.withdraw(money(150)).unwrap();
        account.deposit(money(100)).unwrap();
        account.close();

        let causes: Vec<_> = account
            .transitions()
            .transitions()
            .iter()
            .map(|t| t.cause.as_str())
            .collect();
        assert_eq!(causes, ["withdraw", "deposit", "close"]);
        assert_eq!(
            account.transitions().get_path(),
            vec![
                &AccountState::Active,
                &AccountState::Overdrawn,
                &AccountState::Active,
                &AccountState::Closed,
            ]
        );
    }

    #[test]
    fn events_render_like_a_statement() {
        let mut account = Account::open(money(100)).unwrap();
        let lines: Vec<String> = account
            .withdraw(money(150))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            lines,
            [
                "Overdrawn! Moving to Overdrawn state.",
                "Withdrew ₹150. Balance: ₹-50",
            ]
        );
    }

    #[test]
    fn restore_reinstates_balance_and_state() {
        let mut account = Account::open(money(100)).unwrap();
        let saved = account.snapshot();

        account.withdraw(money(150)).unwrap();
        account.restore_from(&saved).unwrap();

        assert_eq!(account.balance(), money(100));
        assert_eq!(account.state(), AccountState::Active);
        assert_eq!(account.transitions().last().map(|t| t.cause.as_str()), Some("restore"));
    }

    #[test]
    fn closed_account_cannot_be_restored() {
        let mut account = Account::open(money(100)).unwrap();
        let saved = account.memento();
        account.close();

        assert_eq!(
            account.restore(&saved).unwrap_err(),
            AccountError::InvalidStateOperation {
                state: AccountState::Closed,
                operation: OperationKind::Restore,
            }
        );
        assert!(account.is_closed());
    }

    #[test]
    fn memento_contradicting_its_state_is_refused() {
        let mut account = Account::open(money(100)).unwrap();
        let forged = [
            AccountMemento {
                balance: money(-500),
                state: AccountState::Active,
            },
            AccountMemento {
                balance: Money::ZERO,
                state: AccountState::Overdrawn,
            },
        ];

        for memento in forged {
            assert_eq!(
                account.restore(&memento).unwrap_err(),
                AccountError::InconsistentMemento {
                    state: memento.state(),
                    balance: memento.balance(),
                }
            );
        }
        assert_eq!(account.balance(), money(100));
        assert_eq!(account.state(), AccountState::Active);
        assert!(account.withdraw(money(100)).is_ok());
    }

    #[test]
    fn memento_exposes_what_it_captured() {
        let mut account = Account::open(money(10)).unwrap();
        account.withdraw(money(30)).unwrap();

        let memento = account.memento();

        assert_eq!(memento.balance(), money(-20));
        assert_eq!(memento.state(), AccountState::Overdrawn);
    }

    #[test]
    fn plan_is_pure() {
        let first = plan(AccountState::Active, money(10), Movement::Withdraw(money(15)));
        let second = plan(AccountState::Active, money(10), Movement::Withdraw(money(15)));
        assert_eq!(first, second);
    }
}
