//! Approval Workflow
//!
//! This example routes purchase requests through a chain of approvers.
//!
//! Key concepts:
//! - Ordered handlers: Manager -> Director -> CEO
//! - First accepting handler processes the request, the rest never see it
//! - Requests nobody accepts surface as `UnhandledRequest`
//! - Policies loaded from TOML and validated in a single pass
//!
//! Run with: RUST_LOG=statecraft=debug cargo run --example approval_workflow

use statecraft::approval::ApprovalPolicy;
use statecraft::Money;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CUSTOM_POLICY: &str = r#"
[[tier]]
approver = "Team Lead"
up_to = 250

[[tier]]
approver = "Finance"
above = 250
up_to = 25000
"#;

const BROKEN_POLICY: &str = r#"
[[tier]]
approver = ""
up_to = 10

[[tier]]
approver = "Finance"
above = 900
up_to = 100
"#;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statecraft=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    println!("=== Approval Workflow Example ===\n");

    let chain = ApprovalPolicy::default().build_chain()?;
    println!("Chain: {}\n", chain.names().join(" -> "));

    for amount in [500, 1500, 3500, 7500] {
        match chain.handle(&Money::new(amount)) {
            Ok(handled) => println!("  ✓ {}", handled.output),
            Err(err) => println!("  ✗ {err}"),
        }
    }

    println!("\nCustom policy from TOML:");
    let custom = ApprovalPolicy::from_toml_str(CUSTOM_POLICY)?.build_chain()?;
    for amount in [120, 12_000] {
        let handled = custom.handle(&Money::new(amount))?;
        println!("  ✓ {}", handled.output);
    }

    println!("\nBroken policy:");
    if let Err(err) = ApprovalPolicy::from_toml_str(BROKEN_POLICY)?.build_chain() {
        println!("  ✗ {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
