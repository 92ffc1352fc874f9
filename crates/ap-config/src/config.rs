use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DashboardConfig, LoggingConfig, UiConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub dashboard: DashboardConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AP_CONFIG_DIR env var, else use ./.admin-panel/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply AP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit config directory (`--config-dir`).
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AP_CONFIG_DIR env var > ./.admin-panel/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.dashboard.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains('/') || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be a plain file name inside logging.dir",
            ));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: project={}, database={}, api_key={}",
            self.backend.project_id,
            self.backend.database_id,
            if self.backend.api_key.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        info!(
            "  endpoints: auth={}, firestore={}",
            self.backend.auth_url, self.backend.firestore_url
        );
        info!("  dashboard: collection={}", self.dashboard.collection);
        info!("  ui: locale={}", self.ui.locale);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("AP_API_KEY", &mut self.backend.api_key);
        Self::apply_env_string("AP_PROJECT_ID", &mut self.backend.project_id);
        Self::apply_env_string("AP_AUTH_URL", &mut self.backend.auth_url);
        Self::apply_env_string("AP_FIRESTORE_URL", &mut self.backend.firestore_url);
        Self::apply_env_string("AP_DATABASE_ID", &mut self.backend.database_id);

        // Dashboard
        Self::apply_env_string("AP_COLLECTION", &mut self.dashboard.collection);

        // UI
        Self::apply_env_parse("AP_LOCALE", &mut self.ui.locale);

        // Logging
        Self::apply_env_parse("AP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AP_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(val) = std::env::var(key) {
            *target = val;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(key) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(val) = std::env::var(key)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(key) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }
}
