//! Identity Toolkit request and response bodies.

use ap_core::Identity;

use serde::{Deserialize, Serialize};

pub(crate) const SIGN_IN_WITH_PASSWORD: &str = "signInWithPassword";
pub(crate) const SIGN_UP: &str = "signUp";
pub(crate) const SIGN_IN_WITH_IDP: &str = "signInWithIdp";

/// Redirect URI reported to `signInWithIdp`; only echoed back by the service
pub(crate) const IDP_REQUEST_URI: &str = "http://localhost";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdpRequest {
    pub post_body: String,
    pub request_uri: &'static str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

impl IdpRequest {
    pub(crate) fn new(provider_id: &str, id_token: &str) -> Self {
        Self {
            post_body: format!("id_token={id_token}&providerId={provider_id}"),
            request_uri: IDP_REQUEST_URI,
            return_secure_token: true,
            return_idp_credential: true,
        }
    }
}

/// Successful sign-in payload shared by all three endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthSession {
    pub local_id: String,
    pub id_token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, alias = "profilePicture")]
    pub photo_url: Option<String>,
}

impl AuthSession {
    pub(crate) fn identity(&self) -> Identity {
        Identity {
            uid: self.local_id.clone(),
            email: non_empty(&self.email),
            display_name: non_empty(&self.display_name),
            photo_url: non_empty(&self.photo_url),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
