//! Claims domain errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors raised when a claim record violates its invariants
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim is missing a claim_id")]
    MissingClaimId,

    #[error("Claim {claim_id} is missing a policy_number")]
    MissingPolicyNumber { claim_id: String },

    #[error("Claim {claim_id} has an invalid amount: {source}")]
    InvalidAmount {
        claim_id: String,
        source: MoneyError,
    },

    #[error("Claim {claim_id} has an invalid settlement amount: {source}")]
    InvalidSettlementAmount {
        claim_id: String,
        source: MoneyError,
    },
}

/// Errors raised while turning raw filter input into typed predicates
///
/// Raw input comes from the submission form as strings. A predicate whose
/// value cannot be interpreted against the field it filters is reported to
/// the caller; silently dropping it would return misleading results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter field '{field}' expects a numeric amount, got '{value}'")]
    InvalidAmount { field: &'static str, value: String },

    #[error("Filter field 'filed_on_or_after' expects an ISO-8601 date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { value: String },

    #[error("Filter field 'status' has no status named '{value}'")]
    UnknownStatus { value: String },
}
