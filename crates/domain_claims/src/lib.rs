//! Claims Domain
//!
//! This crate defines the claim record, the filter predicates used to
//! query the claims history, and the aggregate statistics computed over
//! it. Persistence lives in `infra_store`; nothing here touches a file.

pub mod claim;
pub mod error;
pub mod filter;
pub mod statistics;

pub use claim::{Claim, ClaimStatus, ClaimType};
pub use error::{ClaimError, FilterError};
pub use filter::{ClaimFilter, FilterParams};
pub use statistics::ClaimStatistics;
