//! Property-based test data generators

use proptest::prelude::*;

use core_kernel::{ClaimId, Money, PolicyNumber};
use domain_claims::{Claim, ClaimStatus, ClaimType};

use crate::builders::TestClaimBuilder;

/// Strategy for any claim status
pub fn arb_claim_status() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Denied),
        Just(ClaimStatus::Adjusted),
    ]
}

/// Strategy for claim categories seen in real history files
pub fn arb_claim_type() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::new("Medical")),
        Just(ClaimType::new("Prescription")),
        Just(ClaimType::new("Dental")),
        Just(ClaimType::new("Vision")),
        Just(ClaimType::new("Emergency Care")),
    ]
}

/// Strategy for non-negative amounts up to $100,000
pub fn arb_money() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for a well-formed claim
pub fn arb_claim() -> impl Strategy<Value = Claim> {
    (
        "[A-Z]{3}[0-9]{6}",
        0u32..3u32,
        arb_claim_type(),
        arb_money(),
        arb_claim_status(),
        prop::option::of(0u32..120u32),
    )
        .prop_map(|(id, policy_seq, claim_type, amount, status, days)| {
            let mut builder = TestClaimBuilder::new()
                .with_claim_id(ClaimId::new(id))
                .with_policy_number(PolicyNumber::new(format!("POL-2024-{policy_seq:03}")))
                .with_claim_type(claim_type)
                .with_amount(amount)
                .with_status(status);
            if status != ClaimStatus::Pending {
                builder = builder.resolved(status, amount, days.unwrap_or(0));
            }
            builder.build()
        })
}

/// Strategy for a history of distinct-id claims
pub fn arb_claim_history(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(arb_claim(), 0..max_len).prop_map(|mut claims| {
        for (i, claim) in claims.iter_mut().enumerate() {
            claim.claim_id = ClaimId::new(format!("{}-{i}", claim.claim_id));
        }
        claims
    })
}
