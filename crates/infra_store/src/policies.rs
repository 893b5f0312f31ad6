//! File-backed policy table
//!
//! Policies are reference data loaded once at startup: a JSON object
//! keyed by policy number. The advisor only reads them, so the table is
//! immutable after construction and needs no locking.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use core_kernel::{Money, PolicyNumber};
use domain_policy::{LimitCheck, PolicyError, PolicyRecord};

use crate::error::StoreError;

/// Read-only store for the policy table
#[derive(Debug)]
pub struct PolicyStore {
    path: PathBuf,
    policies: BTreeMap<PolicyNumber, PolicyRecord>,
}

impl PolicyStore {
    /// Opens the policy table
    ///
    /// An absent file yields an empty table (the advisor degrades to
    /// claims-only operation); a malformed file is fatal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let policies = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|e| StoreError::read_failed(&path, e))?;
            serde_json::from_str(&data).map_err(|e| StoreError::malformed(&path, e))?
        } else {
            warn!(path = %path.display(), "no policy table file, starting empty");
            BTreeMap::new()
        };

        info!(path = %path.display(), count = policies.len(), "opened policy table");
        Ok(Self { path, policies })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of policies in the table
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true when the table is empty
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Looks up a policy by number, returning an owned copy
    pub fn get(&self, policy_number: &PolicyNumber) -> Option<PolicyRecord> {
        self.policies.get(policy_number).cloned()
    }

    /// Checks a claim amount against a policy's available coverage
    pub fn check_limit(
        &self,
        policy_number: &PolicyNumber,
        claim_amount: Money,
    ) -> Result<LimitCheck, PolicyError> {
        let policy = self
            .policies
            .get(policy_number)
            .ok_or_else(|| PolicyError::not_found(policy_number))?;
        Ok(policy.check_limit(policy_number, claim_amount))
    }

    /// Required documents a claim has not provided
    pub fn missing_documents(
        &self,
        policy_number: &PolicyNumber,
        claim_type: &str,
        provided: &[String],
    ) -> Result<Vec<String>, PolicyError> {
        let policy = self
            .policies
            .get(policy_number)
            .ok_or_else(|| PolicyError::not_found(policy_number))?;
        Ok(policy.missing_documents(claim_type, provided))
    }
}
