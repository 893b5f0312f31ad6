//! Core Kernel - Foundational types for the claims advisor
//!
//! This crate provides the building blocks shared by the domain and
//! storage crates:
//! - Money and Rate types with precise decimal arithmetic
//! - String-backed typed identifiers for claims and policies

pub mod identifiers;
pub mod money;

pub use identifiers::{ClaimId, PolicyNumber};
pub use money::{Money, MoneyError, Rate};
