//! File-backed persistence for the claims advisor
//!
//! Two stores over durable JSON files:
//! - [`ClaimsStore`]: the append-only claims history with filtered search,
//!   aggregate statistics, and write-through saves
//! - [`PolicyStore`]: the read-only policy table with coverage-limit and
//!   documentation checks
//!
//! Construct stores explicitly and pass them to whatever layer needs
//! them; there is no process-wide instance.

pub mod claims;
pub mod error;
pub mod policies;
pub mod settings;

pub use claims::ClaimsStore;
pub use error::StoreError;
pub use policies::PolicyStore;
pub use settings::StoreSettings;
