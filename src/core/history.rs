//! Transition log for state machines.
//!
//! Every state change an entity goes through is recorded as a
//! `StateTransition`. The log is an immutable value: `record` returns a new
//! log and leaves the receiver untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One move from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    pub timestamp: DateTime<Utc>,
    /// The operation that triggered the move, e.g. `"withdraw"`.
    pub cause: String,
}

impl<S: State> StateTransition<S> {
    /// Build a transition stamped with the current time.
    pub fn now(from: S, to: S, cause: impl Into<String>) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            cause: cause.into(),
        }
    }
}

/// Ordered log of state transitions.
///
/// # Example
///
/// ```rust
/// use statecraft::account::AccountState;
/// use statecraft::core::{StateHistory, StateTransition};
///
/// let log = StateHistory::new()
///     .record(StateTransition::now(AccountState::Active, AccountState::Overdrawn, "withdraw"))
///     .record(StateTransition::now(AccountState::Overdrawn, AccountState::Active, "deposit"));
///
/// assert_eq!(
///     log.get_path(),
///     vec![&AccountState::Active, &AccountState::Overdrawn, &AccountState::Active]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return a new log with `transition` appended.
    #[must_use]
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited in order: the first `from`, then every `to`.
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
