//! Tier handlers and the approvals they produce.

use crate::approval::policy::ApprovalTier;
use crate::chain::Handler;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A granted approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub approver: String,
    pub amount: Money,
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} approved {}", self.approver, self.amount)
    }
}

/// Handler that approves every amount inside its tier's range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierHandler {
    tier: ApprovalTier,
}

impl TierHandler {
    pub fn new(tier: ApprovalTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> &ApprovalTier {
        &self.tier
    }
}

impl Handler<Money> for TierHandler {
    type Output = Approval;

    fn name(&self) -> &str {
        &self.tier.approver
    }

    fn accepts(&self, amount: &Money) -> bool {
        self.tier.covers(*amount)
    }

    fn process(&self, amount: &Money) -> Approval {
        let approval = Approval {
            approver: self.tier.approver.clone(),
            amount: *amount,
        };
        tracing::info!("{approval}");
        approval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_uses_tier_range() {
        let handler = TierHandler::new(ApprovalTier::between("Director", Money::new(1000), Money::new(3000)));

        assert_eq!(handler.name(), "Director");
        assert!(!handler.accepts(&Money::new(1000)));
        assert!(handler.accepts(&Money::new(1500)));
        assert!(handler.accepts(&Money::new(3000)));
        assert!(!handler.accepts(&Money::new(3001)));
    }

    #[test]
    fn approval_reads_naturally() {
        let handler = TierHandler::new(ApprovalTier::up_to("Manager", Money::new(1000)));
        let approval = handler.process(&Money::new(500));

        assert_eq!(approval.to_string(), "Manager approved ₹500");
    }
}
