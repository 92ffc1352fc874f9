//! Backend client for the admin panel.
//!
//! [`BackendClient`] is the capability set the panel consumes: password,
//! registration and federated sign-in, sign-out, and list/create/update/delete
//! over a named document collection. [`FirebaseClient`] implements it against
//! the Identity Toolkit and Firestore REST APIs.

pub(crate) mod backend_client;
pub(crate) mod document;
pub(crate) mod error;
pub mod error_codes;
pub(crate) mod firebase;

#[cfg(test)]
mod tests;

pub use backend_client::BackendClient;
pub use document::Document;
pub use error::{BackendError, Result as BackendResult};
pub use firebase::{client::FirebaseClient, idp_token_source::IdpTokenSource};

/// Provider id for Google federated sign-in
pub const GOOGLE_PROVIDER_ID: &str = "google.com";
