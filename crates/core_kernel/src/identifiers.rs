//! Strongly-typed identifiers for domain entities
//!
//! Claim and policy identifiers arrive from callers as opaque strings
//! (the submission form mints ids like `CLM20240115093000`). Newtype
//! wrappers keep the two from being mixed up and give the domain a place
//! to hang parsing and display behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a caller-supplied string
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or whitespace
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Consumes the identifier, returning the inner string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ClaimId);
define_id!(PolicyNumber);
