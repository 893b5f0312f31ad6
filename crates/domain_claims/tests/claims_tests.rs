//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money, PolicyNumber};
use domain_claims::{Claim, ClaimFilter, ClaimStatistics, ClaimStatus, ClaimType};

fn claim(id: &str, claim_type: &str, amount: rust_decimal::Decimal, status: ClaimStatus) -> Claim {
    let mut c = Claim::submitted(
        ClaimId::new(id),
        PolicyNumber::new("POL-2024-001"),
        ClaimType::new(claim_type),
        Money::new(amount),
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        "test claim",
    );
    c.status = status;
    c
}

// ============================================================================
// Wire format tests
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_claim_round_trips_through_history_format() {
        let json = r#"{
            "claim_id": "CLM001",
            "policy_number": "POL-2024-001",
            "claim_type": "Medical",
            "amount": 2500.0,
            "settlement_amount": 2000.0,
            "status": "Adjusted",
            "date_filed": "2024-01-15",
            "processing_time": 14,
            "documents_provided": ["invoice", "medical_report"],
            "description": "Emergency room visit",
            "additional_info": ""
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.claim_id, ClaimId::new("CLM001"));
        assert_eq!(claim.amount, Money::new(dec!(2500)));
        assert_eq!(claim.settlement_amount, Some(Money::new(dec!(2000))));
        assert_eq!(claim.status, ClaimStatus::Adjusted);
        assert_eq!(claim.processing_time, Some(14));
        assert_eq!(
            claim.date_filed,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );

        let back: Claim = serde_json::from_str(&serde_json::to_string(&claim).unwrap()).unwrap();
        assert_eq!(back, claim);
    }

    #[test]
    fn test_pending_claim_serializes_nulls() {
        let claim = claim("CLM002", "Dental", dec!(500), ClaimStatus::Pending);
        let value = serde_json::to_value(&claim).unwrap();

        assert!(value["settlement_amount"].is_null());
        assert!(value["processing_time"].is_null());
        assert_eq!(value["date_filed"], "2024-01-15");
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn test_unknown_status_string_is_rejected() {
        let json = r#"{
            "claim_id": "CLM003",
            "policy_number": "POL-2024-001",
            "claim_type": "Medical",
            "amount": 100.0,
            "settlement_amount": null,
            "status": "Escalated",
            "date_filed": "2024-01-15",
            "processing_time": null
        }"#;

        assert!(serde_json::from_str::<Claim>(json).is_err());
    }
}

// ============================================================================
// Search semantics: soundness and completeness
// ============================================================================

mod search_property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_history() -> impl Strategy<Value = Vec<Claim>> {
        let record = (
            prop_oneof![
                Just("Medical"),
                Just("Dental"),
                Just("Prescription"),
                Just("Vision")
            ],
            0i64..500_000i64,
            prop_oneof![
                Just(ClaimStatus::Pending),
                Just(ClaimStatus::Approved),
                Just(ClaimStatus::Denied),
                Just(ClaimStatus::Adjusted),
            ],
        );
        prop::collection::vec(record, 0..40).prop_map(|records| {
            records
                .into_iter()
                .enumerate()
                .map(|(i, (claim_type, cents, status))| {
                    claim(
                        &format!("CLM-{i}"),
                        claim_type,
                        Money::from_minor(cents).amount(),
                        status,
                    )
                })
                .collect()
        })
    }

    proptest! {
        // Every record in the result satisfies the filter, and every
        // record satisfying the filter is in the result, in input order.
        #[test]
        fn filter_is_sound_and_complete(
            history in arb_history(),
            min_cents in 0i64..500_000i64
        ) {
            let filter = ClaimFilter::new()
                .with_claim_type("Dental")
                .with_min_amount(Money::from_minor(min_cents));

            let matched: Vec<&Claim> =
                history.iter().filter(|c| filter.matches(c)).collect();

            for c in &matched {
                prop_assert_eq!(c.claim_type.as_str(), "Dental");
                prop_assert!(c.amount >= Money::from_minor(min_cents));
            }

            let expected: Vec<&Claim> = history
                .iter()
                .filter(|c| {
                    c.claim_type == ClaimType::new("Dental")
                        && c.amount >= Money::from_minor(min_cents)
                })
                .collect();
            prop_assert_eq!(matched, expected);
        }
    }
}

// ============================================================================
// Statistics worked examples
// ============================================================================

mod statistics_tests {
    use super::*;

    #[test]
    fn test_two_dental_claims_example() {
        let history = vec![
            claim("A", "Dental", dec!(500), ClaimStatus::Approved),
            claim("B", "Dental", dec!(1500), ClaimStatus::Pending),
        ];

        let all = ClaimFilter::new().with_claim_type("Dental");
        let matched: Vec<&Claim> = history.iter().filter(|c| all.matches(c)).collect();
        assert_eq!(matched.len(), 2);

        let stats = ClaimStatistics::compute(history.iter());
        assert_eq!(stats.total_claims, 2);
        assert_eq!(stats.approval_rate, dec!(50.00));
        assert_eq!(stats.average_amount, Money::new(dec!(1000.0)));
    }

    #[test]
    fn test_min_amount_example() {
        let history = vec![
            claim("A", "Dental", dec!(500), ClaimStatus::Approved),
            claim("B", "Dental", dec!(1500), ClaimStatus::Pending),
        ];

        let filter = ClaimFilter::new().with_min_amount(Money::new(dec!(1000)));
        let matched: Vec<&Claim> = history.iter().filter(|c| filter.matches(c)).collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].claim_id, ClaimId::new("B"));
    }
}
