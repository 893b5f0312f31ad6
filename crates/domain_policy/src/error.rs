//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Policy not found: {0}")]
    PolicyNotFound(String),
}

impl PolicyError {
    pub fn not_found(policy_number: impl std::fmt::Display) -> Self {
        PolicyError::PolicyNotFound(policy_number.to_string())
    }
}
