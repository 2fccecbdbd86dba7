//! Bank Account
//!
//! This example walks an account through its states.
//!
//! Key concepts:
//! - Same operations, different behaviour per state (Active, Overdrawn, Closed)
//! - Transitions as side effects of deposits and withdrawals
//! - A caller-owned `Journal` instead of a global logger
//! - Transition log for auditing the path the account took
//!
//! Run with: cargo run --example bank_account

use statecraft::account::{Account, AccountError, AccountEvent};
use statecraft::{Journal, Money};
use tracing_subscriber::EnvFilter;

fn report(journal: &mut Journal, outcome: Result<Vec<AccountEvent>, AccountError>) {
    match outcome {
        Ok(events) => journal.record_all(events),
        Err(err) => journal.record(format!("Rejected: {err}")),
    }
}

fn main() -> Result<(), AccountError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Bank Account Example ===\n");

    let mut journal = Journal::new("main-branch");
    let mut account = Account::open(Money::new(100))?;
    println!("Opened account {} with {}\n", account.id(), account.balance());

    report(&mut journal, account.withdraw(Money::new(150)));
    report(&mut journal, account.withdraw(Money::new(10)));
    report(&mut journal, account.deposit(Money::new(100)));
    report(&mut journal, account.withdraw(Money::new(50)));
    journal.record_all(account.close());
    report(&mut journal, account.deposit(Money::new(50)));

    for entry in journal.entries() {
        println!("  [{}] {}", entry.at.format("%H:%M:%S%.3f"), entry.message);
    }

    let path: Vec<String> = account
        .transitions()
        .get_path()
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("\nState path: {}", path.join(" -> "));
    println!("Final balance: {}", account.balance());

    println!("\n=== Example Complete ===");
    Ok(())
}
