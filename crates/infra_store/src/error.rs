//! Store error types
//!
//! The taxonomy separates fatal load failures (the store refuses to
//! construct over a corrupt backing file) from recoverable write-side
//! failures the caller may retry or correct.

use std::path::PathBuf;
use thiserror::Error;

use domain_claims::ClaimError;

/// Errors that can occur in the file-backed stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file exists but could not be read
    #[error("Failed to read backing file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Backing file exists but is not valid JSON for the expected shape
    #[error("Malformed backing file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record violates the claim invariants
    #[error(transparent)]
    InvalidRecord(#[from] ClaimError),

    /// Backing file carries the same claim id twice
    #[error("Backing file {path} contains duplicate claim id '{claim_id}'")]
    DuplicateInFile { path: PathBuf, claim_id: String },

    /// A claim with this id already exists
    #[error("Claim with id '{0}' already exists")]
    DuplicateClaim(String),

    /// Writing the backing file failed; in-memory state was not changed
    #[error("Failed to write backing file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Encoding the collection for persistence failed
    #[error("Failed to encode claims for persistence: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Malformed {
            path: path.into(),
            source,
        }
    }

    pub fn duplicate(claim_id: impl std::fmt::Display) -> Self {
        StoreError::DuplicateClaim(claim_id.to_string())
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// True for failures that are fatal at store construction
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            StoreError::ReadFailed { .. }
                | StoreError::Malformed { .. }
                | StoreError::DuplicateInFile { .. }
                | StoreError::InvalidRecord(_)
        )
    }

    /// True when the caller supplied a conflicting claim id
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateClaim(_))
    }

    /// True for persistence failures the caller may retry
    pub fn is_write_failure(&self) -> bool {
        matches!(self, StoreError::WriteFailed { .. } | StoreError::Encode(_))
    }
}
