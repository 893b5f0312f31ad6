//! Claim record
//!
//! A claim is immutable once stored: the history file is append-only and
//! the store exposes no update or delete. Status and settlement fields are
//! therefore whatever the record carried when it was written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, Money, PolicyNumber};

use crate::error::ClaimError;

/// Claim status
///
/// Non-Pending statuses are expected to carry settlement fields. The store
/// does not enforce that pairing; the statistics report relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClaimStatus {
    /// Filed, not yet resolved
    Pending,
    /// Approved and settled in full
    Approved,
    /// Denied, no settlement
    Denied,
    /// Settled for an adjusted amount
    Adjusted,
}

impl ClaimStatus {
    /// Returns true once the claim has been resolved either way
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Adjusted => "Adjusted",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "denied" => Ok(ClaimStatus::Denied),
            "adjusted" => Ok(ClaimStatus::Adjusted),
            other => Err(format!("unknown claim status '{other}'")),
        }
    }
}

/// Claim category
///
/// An open string set rather than a closed enum: the history file already
/// mixes Medical, Prescription, Dental, Vision and new categories appear
/// in data before they appear in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimType(String);

impl ClaimType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClaimType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single insurance claim record
///
/// Field names and encodings mirror the claims history file: dates as
/// ISO-8601 strings, amounts as JSON numbers, `settlement_amount` and
/// `processing_time` null until the claim is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier within the store
    pub claim_id: ClaimId,
    /// Reference to an external policy record
    pub policy_number: PolicyNumber,
    /// Category
    pub claim_type: ClaimType,
    /// Claimed amount
    pub amount: Money,
    /// Amount actually paid out, absent while pending
    pub settlement_amount: Option<Money>,
    /// Status
    pub status: ClaimStatus,
    /// Filing date
    pub date_filed: NaiveDate,
    /// Days from filing to resolution, absent while pending
    pub processing_time: Option<u32>,
    /// Document labels supplied with the claim
    #[serde(default)]
    pub documents_provided: Vec<String>,
    /// Free-text description, opaque to the store
    #[serde(default)]
    pub description: String,
    /// Free-text notes, opaque to the store
    #[serde(default)]
    pub additional_info: String,
}

impl Claim {
    /// Creates a freshly submitted claim in Pending status
    pub fn submitted(
        claim_id: ClaimId,
        policy_number: PolicyNumber,
        claim_type: ClaimType,
        amount: Money,
        date_filed: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            claim_id,
            policy_number,
            claim_type,
            amount,
            settlement_amount: None,
            status: ClaimStatus::Pending,
            date_filed,
            processing_time: None,
            documents_provided: Vec::new(),
            description: description.into(),
            additional_info: String::new(),
        }
    }

    /// Checks the hard record invariants
    ///
    /// Run at the storage boundary: on every record read from the backing
    /// file and on every record submitted for saving.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.claim_id.is_blank() {
            return Err(ClaimError::MissingClaimId);
        }
        if self.policy_number.is_blank() {
            return Err(ClaimError::MissingPolicyNumber {
                claim_id: self.claim_id.to_string(),
            });
        }
        self.amount
            .ensure_non_negative()
            .map_err(|source| ClaimError::InvalidAmount {
                claim_id: self.claim_id.to_string(),
                source,
            })?;
        if let Some(settlement) = self.settlement_amount {
            settlement
                .ensure_non_negative()
                .map_err(|source| ClaimError::InvalidSettlementAmount {
                    claim_id: self.claim_id.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Returns true once the claim has been resolved
    pub fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }
}
