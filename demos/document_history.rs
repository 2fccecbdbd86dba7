//! Document History
//!
//! This example saves versions of a document and replays them.
//!
//! Key concepts:
//! - Snapshots are immutable copies taken through the `Originator` trait
//! - `HistoryStack` hands versions back oldest first
//! - Popping an exhausted history is an error, not a silent no-op
//!
//! Run with: cargo run --example document_history

use statecraft::core::{HistoryError, HistoryStack, Originator};
use statecraft::Document;

fn main() -> Result<(), HistoryError> {
    println!("=== Document History Example ===\n");

    let mut doc = Document::new();
    let mut versions = HistoryStack::new();

    doc.append("Hi, this is the start of the edit. ");
    versions.push(doc.snapshot());
    println!("Saved version 1: {:?}", doc.content());

    doc.append("Next comes the low-level design.");
    versions.push(doc.snapshot());
    println!("Saved version 2: {:?}\n", doc.content());

    let mut number = 1;
    while let Some(next) = versions.peek() {
        println!("Version {number} taken at {}", next.taken_at().format("%H:%M:%S%.3f"));
        let snapshot = versions.pop()?;
        doc.restore_from(&snapshot).unwrap_or_else(|never| match never {});
        println!("  {:?}", doc.content());
        number += 1;
    }

    match versions.pop() {
        Err(err) => println!("\nNo more versions: {err}"),
        Ok(_) => unreachable!("history was drained"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
