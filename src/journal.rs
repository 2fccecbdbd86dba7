//! Caller-owned event journal.
//!
//! There is no global logger instance. Code that wants a durable record of
//! what happened takes a `&mut Journal` from its caller; the caller decides
//! how long the journal lives and who shares it. Each entry is also emitted
//! as a `tracing` event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Ordered, timestamped record of messages.
///
/// # Example
///
/// ```rust
/// use statecraft::account::Account;
/// use statecraft::{Journal, Money};
///
/// let mut journal = Journal::new("branch-42");
/// let mut account = Account::open(Money::new(100))?;
///
/// journal.record_all(account.withdraw(Money::new(150))?);
///
/// assert_eq!(
///     journal.messages(),
///     ["Overdrawn! Moving to Overdrawn state.", "Withdrew ₹150. Balance: ₹-50"]
/// );
/// # Ok::<(), statecraft::account::AccountError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journal {
    name: String,
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&mut self, message: impl Display) {
        let message = message.to_string();
        tracing::info!(journal = %self.name, "{message}");
        self.entries.push(JournalEntry {
            at: Utc::now(),
            message,
        });
    }

    pub fn record_all<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for message in messages {
            self.record(message);
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
