//! Approval policy: which approver signs off on which amounts.
//!
//! A policy is an ordered list of tiers. It can be written in TOML:
//!
//! ```toml
//! [[tier]]
//! approver = "Manager"
//! up_to = 1000
//!
//! [[tier]]
//! approver = "Director"
//! above = 1000
//! up_to = 3000
//!
//! [[tier]]
//! approver = "CEO"
//! above = 3000
//! up_to = 5000
//! inclusive = false
//! ```
//!
//! Validation collects every problem in one pass using stillwater's
//! `Validation`, so a broken policy file is reported in full.

use crate::approval::approver::{Approval, TierHandler};
use crate::builder::{BuildError, ChainBuilder};
use crate::chain::HandlerChain;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Chain that routes an amount to the approver allowed to sign it.
pub type ApprovalChain = HandlerChain<Money, Approval>;

fn inclusive_default() -> bool {
    true
}

/// One approver and the amounts they may approve.
///
/// Covers `amount` when `amount > above` (if `above` is set) and
/// `amount <= up_to`, or `amount < up_to` when `inclusive` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalTier {
    pub approver: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<Money>,
    pub up_to: Money,
    #[serde(default = "inclusive_default")]
    pub inclusive: bool,
}

impl ApprovalTier {
    /// Everything up to and including `limit`.
    pub fn up_to(approver: impl Into<String>, limit: Money) -> Self {
        Self {
            approver: approver.into(),
            above: None,
            up_to: limit,
            inclusive: true,
        }
    }

    /// Amounts in `(floor, ceiling]`.
    pub fn between(approver: impl Into<String>, floor: Money, ceiling: Money) -> Self {
        Self {
            approver: approver.into(),
            above: Some(floor),
            up_to: ceiling,
            inclusive: true,
        }
    }

    /// Make the upper bound exclusive.
    pub fn exclusive(mut self) -> Self {
        self.inclusive = false;
        self
    }

    pub fn covers(&self, amount: Money) -> bool {
        let above_floor = self.above.is_none_or(|floor| amount > floor);
        let below_ceiling = if self.inclusive {
            amount <= self.up_to
        } else {
            amount < self.up_to
        };
        above_floor && below_ceiling
    }

    fn is_empty_range(&self) -> bool {
        match self.above {
            Some(floor) if self.inclusive => floor >= self.up_to,
            Some(floor) => floor.checked_add(Money::new(1)).is_none_or(|next| next >= self.up_to),
            None => false,
        }
    }
}

/// A reason a policy cannot be turned into a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("policy defines no tiers")]
    NoTiers,

    #[error("tier {index} has no approver name")]
    UnnamedTier { index: usize },

    #[error("tier '{approver}' covers no amounts (above {above}, up to {up_to})")]
    EmptyRange {
        approver: String,
        above: Money,
        up_to: Money,
    },

    #[error("approver '{approver}' appears in more than one tier")]
    DuplicateApprover { approver: String },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to parse approval policy: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("approval policy has {} violation(s): {}", .violations.len(), join(.violations))]
    Invalid { violations: Vec<PolicyViolation> },

    #[error("failed to build approval chain: {0}")]
    Build(#[from] BuildError),
}

fn join(violations: &[PolicyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ordered approval tiers. Earlier tiers are consulted first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalPolicy {
    #[serde(rename = "tier", default)]
    pub tiers: Vec<ApprovalTier>,
}

impl Default for ApprovalPolicy {
    /// Manager up to 1000, Director up to 3000, CEO below 5000.
    /// Amounts of 5000 or more have no approver.
    fn default() -> Self {
        Self {
            tiers: vec![
                ApprovalTier::up_to("Manager", Money::new(1000)),
                ApprovalTier::between("Director", Money::new(1000), Money::new(3000)),
                ApprovalTier::between("CEO", Money::new(3000), Money::new(5000)).exclusive(),
            ],
        }
    }
}

impl ApprovalPolicy {
    pub fn new(tiers: Vec<ApprovalTier>) -> Self {
        Self { tiers }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, PolicyError> {
        let policy: ApprovalPolicy = toml::from_str(source)?;
        tracing::debug!(tiers = policy.tiers.len(), "approval policy loaded");
        Ok(policy)
    }

    /// Check the policy, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PolicyViolation>>> = Vec::new();

        if self.tiers.is_empty() {
            checks.push(Validation::fail(PolicyViolation::NoTiers));
        }

        let mut seen = HashSet::new();
        for (index, tier) in self.tiers.iter().enumerate() {
            let name = tier.approver.trim();

            let check = if name.is_empty() {
                Validation::fail(PolicyViolation::UnnamedTier { index })
            } else if !seen.insert(name.to_string()) {
                Validation::fail(PolicyViolation::DuplicateApprover {
                    approver: name.to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);

            if let Some(above) = tier.above.filter(|_| tier.is_empty_range()) {
                checks.push(Validation::fail(PolicyViolation::EmptyRange {
                    approver: tier.approver.clone(),
                    above,
                    up_to: tier.up_to,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate the policy and compile it into a handler chain.
    pub fn build_chain(&self) -> Result<ApprovalChain, PolicyError> {
        if let Validation::Failure(errors) = self.validate() {
            let violations: Vec<PolicyViolation> = errors.iter().cloned().collect();
            tracing::warn!(count = violations.len(), "approval policy rejected");
            return Err(PolicyError::Invalid { violations });
        }

        let chain = ChainBuilder::<Money, Approval>::new()
            .handlers(self.tiers.iter().cloned().map(TierHandler::new))
            .build()?;
        Ok(chain)
    }
}
