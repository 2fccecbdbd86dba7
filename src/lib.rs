//! Statecraft: handler chains, account state machines and snapshot histories
//!
//! The crate keeps a pure core and a thin imperative shell. Decisions such
//! as "which handler takes this request" or "what does this withdrawal do to
//! an overdrawn account" are pure functions; the types around them apply the
//! outcome and report it through typed errors and `tracing` events.
//!
//! # Core Concepts
//!
//! - **Handler chains**: ordered first-match dispatch ([`chain`], [`approval`])
//! - **State machines**: state-dependent behaviour with guarded transitions ([`account`])
//! - **Snapshot history**: immutable snapshots replayed oldest first ([`core::HistoryStack`])
//!
//! # Example
//!
//! ```rust
//! use statecraft::account::{Account, AccountState};
//! use statecraft::approval::ApprovalPolicy;
//! use statecraft::core::{HistoryStack, Originator};
//! use statecraft::Money;
//!
//! let approvals = ApprovalPolicy::default().build_chain()?;
//! assert_eq!(approvals.handle(&Money::new(3500))?.handler, "CEO");
//!
//! let mut account = Account::open(Money::new(100))?;
//! let mut history = HistoryStack::new();
//! history.push(account.snapshot());
//!
//! account.withdraw(Money::new(150))?;
//! assert_eq!(account.state(), AccountState::Overdrawn);
//!
//! account.restore_from(&history.pop()?)?;
//! assert_eq!(account.balance(), Money::new(100));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod account;
pub mod approval;
pub mod builder;
pub mod chain;
pub mod core;
pub mod document;
pub mod journal;
pub mod money;

pub use crate::chain::{ChainError, HandlerChain};
pub use crate::core::{Guard, HistoryStack, Originator, Snapshot, State, StateHistory, StateTransition};
pub use crate::document::Document;
pub use crate::journal::Journal;
pub use crate::money::Money;
