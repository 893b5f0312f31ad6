//! Policy record
//!
//! Policies are reference data: the claims advisor reads them from the
//! policy table to check coverage limits and documentation requirements,
//! and never writes them back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Money, PolicyNumber};

/// An insurance policy as stored in the policy table
///
/// The table on disk is a JSON object keyed by policy number, so the
/// number itself lives outside the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Product category, e.g. "Health Insurance"
    pub policy_type: String,
    /// Open status string, e.g. "Active"
    pub status: String,
    /// Maximum total coverage
    pub coverage_limit: Money,
    /// Coverage left after prior settlements; absent means untouched
    #[serde(default)]
    pub remaining_coverage: Option<Money>,
    /// Deductible per claim
    pub deductible: Money,
    /// Required document labels per claim type
    #[serde(default)]
    pub documentation_requirements: BTreeMap<String, Vec<String>>,
}

impl PolicyRecord {
    /// Coverage still available, falling back to the full limit
    pub fn remaining_coverage(&self) -> Money {
        self.remaining_coverage.unwrap_or(self.coverage_limit)
    }

    /// Checks a claim amount against the available coverage
    pub fn check_limit(&self, policy_number: &PolicyNumber, claim_amount: Money) -> LimitCheck {
        let remaining = self.remaining_coverage();
        LimitCheck {
            policy_number: policy_number.clone(),
            claim_amount,
            coverage_limit: self.coverage_limit,
            remaining_coverage: remaining,
            within_limit: claim_amount <= remaining,
        }
    }

    /// Document labels required for a claim type; empty when none are listed
    pub fn required_documents(&self, claim_type: &str) -> &[String] {
        self.documentation_requirements
            .get(claim_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Required documents not present in `provided`
    pub fn missing_documents(&self, claim_type: &str, provided: &[String]) -> Vec<String> {
        self.required_documents(claim_type)
            .iter()
            .filter(|required| !provided.iter().any(|p| p.eq_ignore_ascii_case(required)))
            .cloned()
            .collect()
    }
}

/// Outcome of checking a claim amount against a policy's coverage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitCheck {
    pub policy_number: PolicyNumber,
    pub claim_amount: Money,
    pub coverage_limit: Money,
    pub remaining_coverage: Money,
    pub within_limit: bool,
}
