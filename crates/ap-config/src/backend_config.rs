use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_DATABASE_ID, DEFAULT_FIRESTORE_URL,
};

use serde::Deserialize;

/// Connection settings for the hosted auth + document service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Web API key of the project (sent as the `key` query parameter)
    pub api_key: String,
    pub project_id: String,
    /// Identity Toolkit base URL
    pub auth_url: String,
    /// Firestore base URL
    pub firestore_url: String,
    pub database_id: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            auth_url: String::from(DEFAULT_AUTH_URL),
            firestore_url: String::from(DEFAULT_FIRESTORE_URL),
            database_id: String::from(DEFAULT_DATABASE_ID),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::backend(
                "backend.api_key is required (set it in config.toml or AP_API_KEY)",
            ));
        }

        if self.project_id.trim().is_empty() {
            return Err(ConfigError::backend(
                "backend.project_id is required (set it in config.toml or AP_PROJECT_ID)",
            ));
        }

        Self::validate_url("backend.auth_url", &self.auth_url)?;
        Self::validate_url("backend.firestore_url", &self.firestore_url)?;

        if self.database_id.trim().is_empty() || self.database_id.contains('/') {
            return Err(ConfigError::backend(format!(
                "backend.database_id must be a non-empty id without '/', got '{}'",
                self.database_id
            )));
        }

        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::backend(format!(
                "{name} must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }
}
