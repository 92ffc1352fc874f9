mod backend_config;
mod config;
mod dashboard_config;
mod error;
mod log_level;
mod logging_config;
mod ui_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use ui_config::UiConfig;

const CONFIG_DIR_ENV: &str = "AP_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".admin-panel";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_DATABASE_ID: &str = "(default)";
const DEFAULT_COLLECTION: &str = "users";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
