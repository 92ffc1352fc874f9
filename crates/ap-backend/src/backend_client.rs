use crate::{BackendResult, Document};

use ap_core::Identity;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Auth and document-store operations consumed by the panel.
///
/// Implementations are constructed explicitly from configuration and passed
/// by reference; there is no process-wide handle.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> BackendResult<Identity>;

    async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Identity>;

    /// Dismissal by the user surfaces as one of the cancellation codes in
    /// [`crate::error_codes`].
    async fn sign_in_with_federated_provider(&self, provider_id: &str)
    -> BackendResult<Identity>;

    async fn sign_out(&self) -> BackendResult<()>;

    /// Every document of the collection, in backend order
    async fn list_all(&self, collection: &str) -> BackendResult<Vec<Document>>;

    /// Returns the id assigned by the backend
    async fn create(&self, collection: &str, fields: Map<String, Value>) -> BackendResult<String>;

    /// Merges `fields` into an existing document
    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<()>;

    async fn delete_by_id(&self, collection: &str, id: &str) -> BackendResult<()>;
}
