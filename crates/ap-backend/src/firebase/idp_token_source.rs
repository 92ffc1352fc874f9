use crate::BackendResult;

use async_trait::async_trait;

/// Obtains an OAuth id token from an identity provider.
///
/// This stands in for the browser popup of the hosted SDK: whatever drives
/// the interactive provider flow plugs in here.
#[async_trait]
pub trait IdpTokenSource: Send + Sync {
    /// `Ok(None)` means the user dismissed the provider flow.
    async fn id_token(&self, provider_id: &str) -> BackendResult<Option<String>>;
}
