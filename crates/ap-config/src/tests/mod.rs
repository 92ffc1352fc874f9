mod backend;

use std::env;

use tempfile::TempDir;

const OVERRIDE_VARS: &[&str] = &[
    "AP_API_KEY",
    "AP_PROJECT_ID",
    "AP_AUTH_URL",
    "AP_FIRESTORE_URL",
    "AP_DATABASE_ID",
    "AP_COLLECTION",
    "AP_LOCALE",
    "AP_LOG_LEVEL",
    "AP_LOG_COLORED",
    "AP_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Isolated config directory with every AP_* override cleared.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _config_dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILENAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let cleared = OVERRIDE_VARS.iter().map(|&key| EnvGuard::remove(key)).collect();
    let config_dir = EnvGuard::set(crate::CONFIG_DIR_ENV, dir.path().to_str().unwrap());
    TestEnv {
        dir,
        _config_dir: config_dir,
        _cleared: cleared,
    }
}

/// Minimal valid backend section
pub(crate) const VALID_BACKEND: &str = r#"
[backend]
api_key = "AIza-test-key"
project_id = "demo-project"
"#;
