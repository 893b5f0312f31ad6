//! Test data builders
//!
//! Builder patterns for constructing test claims with sensible defaults,
//! so tests only spell out the fields they care about. Ids are minted
//! from a process-wide counter to keep generated claims distinct.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money, PolicyNumber};
use domain_claims::{Claim, ClaimStatus, ClaimType};

use crate::fixtures::DateFixtures;

static NEXT_CLAIM_SEQ: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(1));

/// Builder for test claims
pub struct TestClaimBuilder {
    claim_id: ClaimId,
    policy_number: PolicyNumber,
    claim_type: ClaimType,
    amount: Money,
    settlement_amount: Option<Money>,
    status: ClaimStatus,
    date_filed: NaiveDate,
    processing_time: Option<u32>,
    documents_provided: Vec<String>,
    description: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder for a pending medical claim with a fresh id
    pub fn new() -> Self {
        let seq = NEXT_CLAIM_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            claim_id: ClaimId::new(format!("CLM-TEST-{seq:06}")),
            policy_number: PolicyNumber::new("POL-2024-001"),
            claim_type: ClaimType::new("Medical"),
            amount: Money::new(dec!(1000.00)),
            settlement_amount: None,
            status: ClaimStatus::Pending,
            date_filed: DateFixtures::january_filing(),
            processing_time: None,
            documents_provided: Vec::new(),
            description: Sentence(3..8).fake(),
        }
    }

    pub fn with_claim_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.claim_id = id.into();
        self
    }

    pub fn with_policy_number(mut self, number: impl Into<PolicyNumber>) -> Self {
        self.policy_number = number.into();
        self
    }

    pub fn with_claim_type(mut self, claim_type: impl Into<ClaimType>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_date_filed(mut self, date: NaiveDate) -> Self {
        self.date_filed = date;
        self
    }

    pub fn with_documents(mut self, documents: &[&str]) -> Self {
        self.documents_provided = documents.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Marks the claim resolved with the given settlement and duration
    pub fn resolved(mut self, status: ClaimStatus, settlement: Money, days: u32) -> Self {
        self.status = status;
        self.settlement_amount = Some(settlement);
        self.processing_time = Some(days);
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::submitted(
            self.claim_id,
            self.policy_number,
            self.claim_type,
            self.amount,
            self.date_filed,
            self.description,
        );
        claim.status = self.status;
        claim.settlement_amount = self.settlement_amount;
        claim.processing_time = self.processing_time;
        claim.documents_provided = self.documents_provided;
        claim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_mints_unique_ids() {
        let a = TestClaimBuilder::new().build();
        let b = TestClaimBuilder::new().build();
        assert_ne!(a.claim_id, b.claim_id);
    }

    #[test]
    fn test_builder_defaults_are_valid() {
        let claim = TestClaimBuilder::new().build();
        assert!(claim.validate().is_ok());
        assert_eq!(claim.status, ClaimStatus::Pending);
    }

    #[test]
    fn test_resolved_populates_settlement_fields() {
        let claim = TestClaimBuilder::new()
            .resolved(ClaimStatus::Approved, Money::new(dec!(900)), 7)
            .build();
        assert!(claim.is_resolved());
        assert_eq!(claim.processing_time, Some(7));
    }
}
