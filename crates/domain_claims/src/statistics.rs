//! Aggregate statistics over the claims history
//!
//! Metrics are recomputed on every call. At the expected history size
//! (hundreds to low thousands of records) a linear fold is cheaper to
//! reason about than any cache.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{Money, Rate};

use crate::claim::{Claim, ClaimStatus};

/// Summary metrics for a set of claims
///
/// All metrics are zero for an empty set; an empty history is a report of
/// zeros, not a division-by-zero fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimStatistics {
    /// Number of claims in the set
    pub total_claims: u64,
    /// Percentage of claims with Approved status, in `[0, 100]`
    #[serde(with = "rust_decimal::serde::float")]
    pub approval_rate: Decimal,
    /// Mean claimed amount
    pub average_amount: Money,
    /// Mean processing time in days, over resolved claims that report one
    #[serde(with = "rust_decimal::serde::float")]
    pub average_processing_time: Decimal,
}

impl ClaimStatistics {
    /// The all-zero report
    pub fn empty() -> Self {
        Self {
            total_claims: 0,
            approval_rate: Decimal::ZERO,
            average_amount: Money::zero(),
            average_processing_time: Decimal::ZERO,
        }
    }

    /// Computes the report over a set of claims
    pub fn compute<'a, I>(claims: I) -> Self
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        let mut total = 0u64;
        let mut approved = 0u64;
        let mut amount_sum = Decimal::ZERO;
        let mut processing_sum = Decimal::ZERO;
        let mut processing_count = 0u64;

        for claim in claims {
            total += 1;
            if claim.status == ClaimStatus::Approved {
                approved += 1;
            }
            amount_sum += claim.amount.amount();
            if let Some(days) = claim.processing_time {
                processing_sum += Decimal::from(days);
                processing_count += 1;
            }
        }

        if total == 0 {
            return Self::empty();
        }

        let stats = Self {
            total_claims: total,
            approval_rate: Rate::from_counts(approved, total)
                .as_percentage()
                .round_dp(2),
            average_amount: Money::new(amount_sum / Decimal::from(total)),
            average_processing_time: if processing_count == 0 {
                Decimal::ZERO
            } else {
                (processing_sum / Decimal::from(processing_count)).round_dp(2)
            },
        };
        debug!(
            total_claims = stats.total_claims,
            approved, "computed claim statistics"
        );
        stats
    }
}
