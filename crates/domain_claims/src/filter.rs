//! Filter predicates over the claims history
//!
//! A filter is a set of optional predicates combined with logical AND; an
//! absent predicate imposes no constraint. Filters exist in two forms: the
//! typed [`ClaimFilter`] the store evaluates, and the raw [`FilterParams`]
//! a caller posts as strings. Parsing happens once at the boundary, so by
//! the time a scan runs no value/field type mismatch is representable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use core_kernel::{Money, PolicyNumber};

use crate::claim::{Claim, ClaimStatus, ClaimType};
use crate::error::FilterError;

/// Typed, AND-composed predicates over claim records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimFilter {
    pub claim_type: Option<ClaimType>,
    pub policy_number: Option<PolicyNumber>,
    pub status: Option<ClaimStatus>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
    pub filed_on_or_after: Option<NaiveDate>,
}

impl ClaimFilter {
    /// Creates a filter with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claim_type(mut self, claim_type: impl Into<ClaimType>) -> Self {
        self.claim_type = Some(claim_type.into());
        self
    }

    pub fn with_policy_number(mut self, policy_number: impl Into<PolicyNumber>) -> Self {
        self.policy_number = Some(policy_number.into());
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn with_max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    pub fn with_filed_on_or_after(mut self, date: NaiveDate) -> Self {
        self.filed_on_or_after = Some(date);
        self
    }

    /// Amount window of `[center * (1 - spread), center * (1 + spread)]`
    ///
    /// The similar-claims lookup searches for history within 20% of the
    /// incoming claim's amount.
    pub fn with_amount_window(mut self, center: Money, spread: Decimal) -> Self {
        let center = center.amount();
        self.min_amount = Some(Money::new(center * (Decimal::ONE - spread)));
        self.max_amount = Some(Money::new(center * (Decimal::ONE + spread)));
        self
    }

    /// Returns true when no predicate is set
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    /// Evaluates every supplied predicate against a claim
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(claim_type) = &self.claim_type {
            if &claim.claim_type != claim_type {
                return false;
            }
        }
        if let Some(policy_number) = &self.policy_number {
            if &claim.policy_number != policy_number {
                return false;
            }
        }
        if let Some(status) = self.status {
            if claim.status != status {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if claim.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if claim.amount > max {
                return false;
            }
        }
        if let Some(date) = self.filed_on_or_after {
            if claim.date_filed < date {
                return false;
            }
        }
        true
    }
}

/// Raw filter input as a caller supplies it
///
/// Every field is an optional string, exactly as a query form posts them.
/// [`FilterParams::parse`] converts to a [`ClaimFilter`] or reports which
/// field could not be interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub claim_type: Option<String>,
    pub policy_number: Option<String>,
    pub status: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub filed_on_or_after: Option<String>,
}

impl FilterParams {
    /// Parses the raw strings into typed predicates
    pub fn parse(&self) -> Result<ClaimFilter, FilterError> {
        let mut filter = ClaimFilter::new();

        if let Some(claim_type) = &self.claim_type {
            filter.claim_type = Some(ClaimType::new(claim_type.clone()));
        }
        if let Some(policy_number) = &self.policy_number {
            filter.policy_number = Some(PolicyNumber::new(policy_number.clone()));
        }
        if let Some(status) = &self.status {
            filter.status = Some(ClaimStatus::from_str(status).map_err(|_| {
                FilterError::UnknownStatus {
                    value: status.clone(),
                }
            })?);
        }
        filter.min_amount = parse_amount("min_amount", self.min_amount.as_deref())?;
        filter.max_amount = parse_amount("max_amount", self.max_amount.as_deref())?;
        if let Some(date) = &self.filed_on_or_after {
            filter.filed_on_or_after = Some(
                NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
                    FilterError::InvalidDate {
                        value: date.clone(),
                    }
                })?,
            );
        }

        Ok(filter)
    }
}

fn parse_amount(field: &'static str, raw: Option<&str>) -> Result<Option<Money>, FilterError> {
    match raw {
        None => Ok(None),
        Some(value) => {
            let amount =
                Decimal::from_str(value.trim()).map_err(|_| FilterError::InvalidAmount {
                    field,
                    value: value.to_string(),
                })?;
            Ok(Some(Money::new(amount)))
        }
    }
}
