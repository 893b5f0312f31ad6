//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims advisor test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and policies
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `assertions`: Custom assertion helpers for domain types
//! - `logging`: Tracing subscriber setup for tests

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod logging;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use logging::*;
