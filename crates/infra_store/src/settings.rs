//! Store configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Locations of the backing files
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Claims history file (JSON array of claims)
    pub claims_path: PathBuf,
    /// Policy table file (JSON object keyed by policy number)
    pub policies_path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            claims_path: PathBuf::from("claims_data/claims_history.json"),
            policies_path: PathBuf::from("policies_data/policies.txt"),
        }
    }
}

impl StoreSettings {
    /// Loads settings from the environment
    ///
    /// Reads `.env` if present, then `ADVISOR_CLAIMS_PATH` and
    /// `ADVISOR_POLICIES_PATH`, falling back to the default locations.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .set_default("claims_path", "claims_data/claims_history.json")?
            .set_default("policies_path", "policies_data/policies.txt")?
            .add_source(config::Environment::with_prefix("ADVISOR"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let settings = StoreSettings::default();
        assert_eq!(
            settings.claims_path,
            PathBuf::from("claims_data/claims_history.json")
        );
        assert_eq!(
            settings.policies_path,
            PathBuf::from("policies_data/policies.txt")
        );
    }
}
