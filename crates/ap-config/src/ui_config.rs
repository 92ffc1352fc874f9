use ap_core::Locale;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Language for messages and labels
    pub locale: Locale,
}
