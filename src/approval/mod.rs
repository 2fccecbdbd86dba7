//! Purchase approvals routed through a handler chain.
//!
//! Each [`ApprovalTier`] becomes a [`TierHandler`]; an amount travels up the
//! tiers until one covers it. An amount above every tier is an
//! [`UnhandledRequest`](crate::chain::ChainError::UnhandledRequest).
//!
//! # Example
//!
//! ```rust
//! use statecraft::approval::ApprovalPolicy;
//! use statecraft::Money;
//!
//! let chain = ApprovalPolicy::default().build_chain()?;
//!
//! let handled = chain.handle(&Money::new(1500))?;
//! assert_eq!(handled.output.to_string(), "Director approved ₹1500");
//!
//! assert!(chain.handle(&Money::new(9000)).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod approver;
mod policy;

pub use approver::{Approval, TierHandler};
pub use policy::{ApprovalChain, ApprovalPolicy, ApprovalTier, PolicyError, PolicyViolation};
