//! File-backed claims history store
//!
//! The store owns the in-memory collection exclusively. Queries hand out
//! owned copies, never references into the collection, so a caller can
//! hold results across a later save without observing mutation. Claims
//! are append-only; the only destructive operation is a full reload.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info, warn};

use core_kernel::PolicyNumber;
use domain_claims::{Claim, ClaimFilter, ClaimStatistics};

use crate::error::StoreError;

/// Store for the claims history, persisted as a JSON array on disk
///
/// Writes are serialized through a single writer lock and persisted
/// write-through: a save is durable before it becomes visible in memory,
/// and a failed write leaves both sides unchanged. Reads run concurrently
/// on a stable snapshot.
#[derive(Debug)]
pub struct ClaimsStore {
    path: PathBuf,
    claims: RwLock<Vec<Claim>>,
}

impl ClaimsStore {
    /// Opens the store over a backing file
    ///
    /// An absent file yields an empty store; a present but malformed or
    /// invariant-violating file is fatal. Truncating bad data to an empty
    /// collection would silently lose history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let claims = read_history(&path)?;
        info!(path = %path.display(), count = claims.len(), "opened claims store");
        Ok(Self {
            path,
            claims: RwLock::new(claims),
        })
    }

    /// Replaces the in-memory collection with the backing file's contents
    ///
    /// Idempotent: repeated reloads return an equivalent collection unless
    /// the file changed underneath the store.
    pub fn reload(&self) -> Result<usize, StoreError> {
        let fresh = read_history(&self.path)?;
        let mut claims = self.claims.write().unwrap_or_else(PoisonError::into_inner);
        *claims = fresh;
        debug!(count = claims.len(), "reloaded claims history");
        Ok(claims.len())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of claims currently held
    pub fn len(&self) -> usize {
        self.claims
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when the store holds no claims
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies of all claims in insertion order
    pub fn all(&self) -> Vec<Claim> {
        self.claims
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Claims satisfying every predicate of the filter, in insertion order
    ///
    /// An empty result is an answer, not an error. Pure read.
    pub fn search(&self, filter: &ClaimFilter) -> Vec<Claim> {
        let claims = self.claims.read().unwrap_or_else(PoisonError::into_inner);
        claims
            .iter()
            .filter(|claim| filter.matches(claim))
            .cloned()
            .collect()
    }

    /// Aggregate statistics, optionally restricted to one policy
    ///
    /// Recomputed on every call over the current snapshot.
    pub fn statistics(&self, policy_number: Option<&PolicyNumber>) -> ClaimStatistics {
        let claims = self.claims.read().unwrap_or_else(PoisonError::into_inner);
        match policy_number {
            Some(number) => ClaimStatistics::compute(
                claims.iter().filter(|claim| &claim.policy_number == number),
            ),
            None => ClaimStatistics::compute(claims.iter()),
        }
    }

    /// Appends a new claim and persists the full collection write-through
    ///
    /// The updated collection is written to disk before the claim becomes
    /// visible in memory; on a write failure nothing is observable.
    pub fn save(&self, claim: Claim) -> Result<(), StoreError> {
        claim.validate()?;

        let mut claims = self.claims.write().unwrap_or_else(PoisonError::into_inner);
        if claims.iter().any(|existing| existing.claim_id == claim.claim_id) {
            return Err(StoreError::duplicate(&claim.claim_id));
        }

        let mut snapshot: Vec<&Claim> = claims.iter().collect();
        snapshot.push(&claim);
        write_atomic(&self.path, &snapshot)?;

        info!(claim_id = %claim.claim_id, total = snapshot.len(), "saved claim");
        claims.push(claim);
        Ok(())
    }
}

fn read_history(path: &Path) -> Result<Vec<Claim>, StoreError> {
    if !path.exists() {
        warn!(path = %path.display(), "no claims history file, starting empty");
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path).map_err(|e| StoreError::read_failed(path, e))?;
    let claims: Vec<Claim> =
        serde_json::from_str(&data).map_err(|e| StoreError::malformed(path, e))?;

    let mut seen = HashSet::with_capacity(claims.len());
    for claim in &claims {
        claim.validate()?;
        if !seen.insert(claim.claim_id.clone()) {
            return Err(StoreError::DuplicateInFile {
                path: path.to_path_buf(),
                claim_id: claim.claim_id.to_string(),
            });
        }
    }

    Ok(claims)
}

/// Writes the collection to a sibling temp file, then renames it over the
/// target so the backing file is never observed half-written.
fn write_atomic(path: &Path, claims: &[&Claim]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::write_failed(path, e))?;
        }
    }

    let encoded = serde_json::to_string_pretty(claims).map_err(StoreError::Encode)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, encoded).map_err(|e| StoreError::write_failed(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::write_failed(path, e))?;
    Ok(())
}
