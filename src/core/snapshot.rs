//! Snapshots and the oldest-first snapshot history.
//!
//! An [`Originator`] captures its observable state as a [`Snapshot`]; a
//! [`HistoryStack`] keeps snapshots in the order they were pushed and hands
//! them back oldest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history is empty")]
    EmptyHistory,
}

/// Immutable capture of some state at a point in time.
///
/// There are no mutable accessors: once taken, a snapshot never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    state: T,
    taken_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Capture `state` now.
    pub fn capture(state: T) -> Self {
        Self {
            state,
            taken_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn into_state(self) -> T {
        self.state
    }
}

/// Snapshot sequence with FIFO retrieval.
///
/// `pop` returns the *oldest* snapshot, not the most recent one. This is a
/// replay queue of saved versions, not an undo stack.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{HistoryError, HistoryStack, Snapshot};
///
/// let mut history = HistoryStack::new();
/// history.push(Snapshot::capture("v1"));
/// history.push(Snapshot::capture("v2"));
///
/// assert_eq!(*history.pop()?.state(), "v1");
/// assert_eq!(*history.pop()?.state(), "v2");
/// assert_eq!(history.pop(), Err(HistoryError::EmptyHistory));
/// # Ok::<(), HistoryError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryStack<T> {
    snapshots: VecDeque<Snapshot<T>>,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryStack<T> {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::new(),
        }
    }

    /// Append to the end.
    pub fn push(&mut self, snapshot: Snapshot<T>) {
        self.snapshots.push_back(snapshot);
        tracing::debug!(len = self.snapshots.len(), "snapshot pushed");
    }

    /// Remove and return the oldest snapshot.
    pub fn pop(&mut self) -> Result<Snapshot<T>, HistoryError> {
        let snapshot = self
            .snapshots
            .pop_front()
            .ok_or(HistoryError::EmptyHistory)?;
        tracing::debug!(remaining = self.snapshots.len(), "snapshot popped");
        Ok(snapshot)
    }

    /// The snapshot `pop` would return next.
    pub fn peek(&self) -> Option<&Snapshot<T>> {
        self.snapshots.front()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.snapshots.iter()
    }
}

/// An entity that can save and restore its observable state.
///
/// `restore` is fallible so entities can refuse a restore their current
/// mode does not allow; entities that never refuse use
/// [`std::convert::Infallible`].
pub trait Originator {
    type Memento: Clone;
    type Error;

    fn memento(&self) -> Self::Memento;

    fn restore(&mut self, memento: &Self::Memento) -> Result<(), Self::Error>;

    fn snapshot(&self) -> Snapshot<Self::Memento> {
        Snapshot::capture(self.memento())
    }

    fn restore_from(&mut self, snapshot: &Snapshot<Self::Memento>) -> Result<(), Self::Error> {
        self.restore(snapshot.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Counter {
        value: u32,
    }

    impl Originator for Counter {
        type Memento = u32;
        type Error = Infallible;

        fn memento(&self) -> u32 {
            self.value
        }

        fn restore(&mut self, memento: &u32) -> Result<(), Infallible> {
            self.value = *memento;
            Ok(())
        }
    }

    #[test]
    fn pop_returns_oldest_first() {
        let mut history = HistoryStack::new();
        history.push(Snapshot::capture('a'));
        history.push(Snapshot::capture('b'));

        assert_eq!(history.pop().map(Snapshot::into_state), Ok('a'));
        assert_eq!(history.pop().map(Snapshot::into_state), Ok('b'));
        assert_eq!(history.pop(), Err(HistoryError::EmptyHistory));
    }

    #[test]
    fn pop_on_new_history_fails() {
        let mut history: HistoryStack<String> = HistoryStack::new();
        assert_eq!(history.pop(), Err(HistoryError::EmptyHistory));
        assert!(history.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut history = HistoryStack::new();
        history.push(Snapshot::capture(1));
        history.push(Snapshot::capture(2));

        assert_eq!(history.peek().map(|s| *s.state()), Some(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn iter_is_in_push_order() {
        let mut history = HistoryStack::new();
        for n in 1..=3 {
            history.push(Snapshot::capture(n));
        }
        let states: Vec<_> = history.iter().map(|s| *s.state()).collect();
        assert_eq!(states, [1, 2, 3]);
    }

    #[test]
    fn snapshots_are_ordered_by_capture_time() {
        let first = Snapshot::capture(());
        let second = Snapshot::capture(());
        assert!(first.taken_at() <= second.taken_at());
    }

    #[test]
    fn originator_round_trip() {
        let mut counter = Counter { value: 7 };
        let saved = counter.snapshot();

        counter.value = 99;
        counter.restore_from(&saved).unwrap();

        assert_eq!(counter.value, 7);
        assert_eq!(*saved.state(), 7);
    }
}
