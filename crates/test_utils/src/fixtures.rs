//! Pre-built test data for common entities

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money, PolicyNumber};
use domain_claims::{Claim, ClaimStatus, ClaimType};
use domain_policy::PolicyRecord;

/// Fixed dates used across fixtures
pub struct DateFixtures;

impl DateFixtures {
    pub fn january_filing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
    }

    pub fn march_filing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid date")
    }
}

/// Ready-made claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    pub fn approved_medical() -> Claim {
        let mut claim = Claim::submitted(
            ClaimId::new("CLM-MED-001"),
            PolicyNumber::new("POL-2024-001"),
            ClaimType::new("Medical"),
            Money::new(dec!(2500.00)),
            DateFixtures::january_filing(),
            "Emergency room visit after a fall",
        );
        claim.status = ClaimStatus::Approved;
        claim.settlement_amount = Some(Money::new(dec!(2500.00)));
        claim.processing_time = Some(12);
        claim.documents_provided = vec!["invoice".to_string(), "medical_report".to_string()];
        claim
    }

    pub fn pending_dental() -> Claim {
        Claim::submitted(
            ClaimId::new("CLM-DEN-001"),
            PolicyNumber::new("POL-2024-001"),
            ClaimType::new("Dental"),
            Money::new(dec!(1500.00)),
            DateFixtures::march_filing(),
            "Root canal treatment",
        )
    }

    pub fn denied_prescription() -> Claim {
        let mut claim = Claim::submitted(
            ClaimId::new("CLM-RX-001"),
            PolicyNumber::new("POL-2024-002"),
            ClaimType::new("Prescription"),
            Money::new(dec!(320.00)),
            DateFixtures::january_filing(),
            "Brand-name drug with generic available",
        );
        claim.status = ClaimStatus::Denied;
        claim.settlement_amount = Some(Money::zero());
        claim.processing_time = Some(5);
        claim
    }

    pub fn adjusted_vision() -> Claim {
        let mut claim = Claim::submitted(
            ClaimId::new("CLM-VIS-001"),
            PolicyNumber::new("POL-2024-002"),
            ClaimType::new("Vision"),
            Money::new(dec!(800.00)),
            DateFixtures::march_filing(),
            "Prescription glasses and exam",
        );
        claim.status = ClaimStatus::Adjusted;
        claim.settlement_amount = Some(Money::new(dec!(600.00)));
        claim.processing_time = Some(9);
        claim
    }

    /// A small mixed history covering every status
    pub fn sample_history() -> Vec<Claim> {
        vec![
            Self::approved_medical(),
            Self::pending_dental(),
            Self::denied_prescription(),
            Self::adjusted_vision(),
        ]
    }

    /// The sample history in backing-file form, for seeding test files
    pub fn sample_history_json() -> String {
        serde_json::to_string_pretty(&Self::sample_history()).expect("fixtures serialize")
    }
}

/// Ready-made policy records
pub struct PolicyFixtures;

impl PolicyFixtures {
    pub fn active_health() -> (PolicyNumber, PolicyRecord) {
        (
            PolicyNumber::new("POL-2024-001"),
            PolicyRecord {
                policy_type: "Health Insurance".to_string(),
                status: "Active".to_string(),
                coverage_limit: Money::new(dec!(100000.00)),
                remaining_coverage: Some(Money::new(dec!(85000.00))),
                deductible: Money::new(dec!(1000.00)),
                documentation_requirements: BTreeMap::from([
                    (
                        "Medical".to_string(),
                        vec!["invoice".to_string(), "medical_report".to_string()],
                    ),
                    (
                        "Prescription".to_string(),
                        vec!["prescription".to_string(), "pharmacy_receipt".to_string()],
                    ),
                ]),
            },
        )
    }

    pub fn nearly_exhausted_dental() -> (PolicyNumber, PolicyRecord) {
        (
            PolicyNumber::new("POL-2024-002"),
            PolicyRecord {
                policy_type: "Dental Plan".to_string(),
                status: "Active".to_string(),
                coverage_limit: Money::new(dec!(5000.00)),
                remaining_coverage: Some(Money::new(dec!(150.00))),
                deductible: Money::new(dec!(50.00)),
                documentation_requirements: BTreeMap::new(),
            },
        )
    }
}
