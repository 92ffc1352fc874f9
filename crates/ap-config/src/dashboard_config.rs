use crate::{ConfigError, ConfigErrorResult, DEFAULT_COLLECTION};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Collection holding the managed user records
    pub collection: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            collection: String::from(DEFAULT_COLLECTION),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::dashboard("dashboard.collection cannot be empty"));
        }

        if self.collection.contains('/') {
            return Err(ConfigError::dashboard(format!(
                "dashboard.collection must be a top-level collection name, got '{}'",
                self.collection
            )));
        }

        Ok(())
    }
}
