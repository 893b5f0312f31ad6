//! Policy Domain
//!
//! Policy reference data and the deterministic checks the claims advisor
//! runs against it: coverage-limit verification and documentation
//! requirement diffs.

pub mod error;
pub mod policy;

pub use error::PolicyError;
pub use policy::{LimitCheck, PolicyRecord};
