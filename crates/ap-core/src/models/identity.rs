//! Authenticated principal as issued by the hosted auth provider.

use crate::Locale;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in administrator.
///
/// Owned by the backend; the panel only keeps a read-only copy for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    /// Federated providers may withhold the address
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            photo_url: None,
        }
    }

    /// Display name, or the generic administrator title when none is set
    pub fn display_label(&self, locale: Locale) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => match locale {
                Locale::Es => "Administrador",
                Locale::En => "Administrator",
            },
        }
    }

    /// Upper-cased first letter of the email, used when there is no avatar
    pub fn avatar_initial(&self) -> Option<char> {
        self.email
            .as_deref()
            .and_then(|email| email.chars().next())
            .and_then(|c| c.to_uppercase().next())
    }
}
