use crate::firebase::auth_api::{
    AuthSession, IdpRequest, PasswordRequest, SIGN_IN_WITH_IDP, SIGN_IN_WITH_PASSWORD, SIGN_UP,
};
use crate::firebase::firestore_value::{decode_fields, encode_fields};
use crate::{BackendClient, BackendError, BackendResult, Document, IdpTokenSource, error_codes};

use ap_config::BackendConfig;
use ap_core::Identity;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;

const USER_AGENT: &str = concat!("admin-panel/", env!("CARGO_PKG_VERSION"));
const LIST_PAGE_SIZE: u32 = 300;

/// REST client for Identity Toolkit (auth) and Firestore (documents).
///
/// The id token of the current session is kept inside the client and sent as
/// a bearer token on every document request.
pub struct FirebaseClient {
    api_key: String,
    auth_url: String,
    documents_url: String,
    http: ReqwestClient,
    id_token: RwLock<Option<String>>,
    idp_token_source: Option<Arc<dyn IdpTokenSource>>,
}

impl FirebaseClient {
    /// Create a client from backend configuration
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let http = ReqwestClient::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            documents_url: format!(
                "{}/v1/projects/{}/databases/{}/documents",
                config.firestore_url.trim_end_matches('/'),
                config.project_id,
                config.database_id
            ),
            http,
            id_token: RwLock::new(None),
            idp_token_source: None,
        })
    }

    /// Enable federated sign-in through the given provider flow
    pub fn with_idp_token_source(mut self, source: Arc<dyn IdpTokenSource>) -> Self {
        self.idp_token_source = Some(source);
        self
    }

    pub fn documents_url(&self) -> &str {
        &self.documents_url
    }

    pub async fn is_signed_in(&self) -> bool {
        self.id_token.read().await.is_some()
    }

    /// Call an `accounts:*` endpoint and keep the returned session token
    async fn authenticate<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> BackendResult<Identity> {
        let url = format!("{}/v1/accounts:{}", self.auth_url, endpoint);
        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(auth_error(status, &text));
        }

        let session: AuthSession = serde_json::from_str(&text)?;
        *self.id_token.write().await = Some(session.id_token.clone());

        let identity = session.identity();
        info!("Signed in via {endpoint}: {}", identity.uid);
        Ok(identity)
    }

    /// Build a document request, attaching the session token if any.
    ///
    /// The collection and the optional document id are each appended as one
    /// percent-encoded path segment.
    async fn document_request(
        &self,
        method: Method,
        collection: &str,
        id: Option<&str>,
    ) -> BackendResult<RequestBuilder> {
        let mut url = Url::parse(&self.documents_url)
            .map_err(|e| BackendError::decode(format!("invalid documents url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::decode("documents url cannot take path segments"))?
            .push(collection)
            .extend(id);

        let mut req = self
            .http
            .request(method, url)
            .query(&[("key", self.api_key.as_str())]);

        if let Some(ref token) = *self.id_token.read().await {
            req = req.bearer_auth(token);
        }

        Ok(req)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: RequestBuilder) -> BackendResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(firestore_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl BackendClient for FirebaseClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Identity> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        self.authenticate(SIGN_IN_WITH_PASSWORD, &body).await
    }

    async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Identity> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        self.authenticate(SIGN_UP, &body).await
    }

    async fn sign_in_with_federated_provider(
        &self,
        provider_id: &str,
    ) -> BackendResult<Identity> {
        let Some(ref source) = self.idp_token_source else {
            return Err(BackendError::api(
                error_codes::OPERATION_NOT_SUPPORTED,
                "no identity provider flow is available",
            ));
        };

        let Some(token) = source.id_token(provider_id).await? else {
            return Err(BackendError::api(
                error_codes::POPUP_CLOSED_BY_USER,
                format!("{provider_id} sign-in was dismissed by the user"),
            ));
        };

        let body = IdpRequest::new(provider_id, &token);
        self.authenticate(SIGN_IN_WITH_IDP, &body).await
    }

    async fn sign_out(&self) -> BackendResult<()> {
        if self.id_token.write().await.take().is_none() {
            debug!("Sign-out requested without an active session");
        }
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> BackendResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut req = self
                .document_request(Method::GET, collection, None)
                .await?
                .query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(ref token) = page_token {
                req = req.query(&[("pageToken", token.as_str())]);
            }

            let body = self.execute(req).await?;
            let page: ListResponse = if body.is_null() {
                ListResponse::default()
            } else {
                serde_json::from_value(body)?
            };

            for raw in page.documents {
                documents.push(raw.into_document()?);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Listed {} documents from {collection}", documents.len());
        Ok(documents)
    }

    async fn create(&self, collection: &str, fields: Map<String, Value>) -> BackendResult<String> {
        let req = self
            .document_request(Method::POST, collection, None)
            .await?
            .json(&json!({ "fields": encode_fields(&fields) }));

        let body = self.execute(req).await?;
        let created: RawDocument = serde_json::from_value(body)?;
        let id = document_id(&created.name)?;

        debug!("Created {collection}/{id}");
        Ok(id)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<()> {
        let id = document_segment(id)?;
        let mut params: Vec<(&str, String)> = fields
            .keys()
            .map(|key| ("updateMask.fieldPaths", field_path(key)))
            .collect();
        params.push(("currentDocument.exists", String::from("true")));

        let req = self
            .document_request(Method::PATCH, collection, Some(id))
            .await?
            .query(&params)
            .json(&json!({ "fields": encode_fields(&fields) }));

        self.execute(req).await?;
        debug!("Updated {collection}/{id}");
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> BackendResult<()> {
        let id = document_segment(id)?;
        let req = self
            .document_request(Method::DELETE, collection, Some(id))
            .await?;

        self.execute(req).await?;
        debug!("Deleted {collection}/{id}");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl RawDocument {
    fn into_document(self) -> BackendResult<Document> {
        let id = document_id(&self.name)?;
        Ok(Document::new(id, decode_fields(&self.fields)?))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Last path segment of `projects/../documents/<collection>/<id>`
pub(crate) fn document_id(name: &str) -> BackendResult<String> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(String::from)
        .ok_or_else(|| BackendError::decode(format!("document name without id: '{name}'")))
}

/// A caller-supplied id must name a document directly inside the collection
#[track_caller]
pub(crate) fn document_segment(id: &str) -> BackendResult<&str> {
    if id.is_empty() || id == "." || id == ".." || id.contains('/') {
        return Err(BackendError::api(
            error_codes::INVALID_DOCUMENT_ID,
            format!("'{id}' is not a valid document id"),
        ));
    }
    Ok(id)
}

/// Quote field names that are not plain identifiers
pub(crate) fn field_path(name: &str) -> String {
    let simple = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if simple {
        name.to_string()
    } else {
        format!("`{}`", name.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

#[track_caller]
pub(crate) fn auth_error(status: StatusCode, text: &str) -> BackendError {
    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => BackendError::api(
            error_codes::from_identity_toolkit(&envelope.error.message),
            envelope.error.message,
        ),
        Err(_) => BackendError::api(error_codes::INTERNAL_ERROR, format!("HTTP {status}")),
    }
}

#[track_caller]
pub(crate) fn firestore_error(status: StatusCode, text: &str) -> BackendError {
    let fallback = || format!("firestore/http-{}", status.as_u16());

    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => {
            let code = envelope
                .error
                .status
                .as_deref()
                .map(error_codes::from_firestore_status)
                .unwrap_or_else(fallback);
            BackendError::api(code, envelope.error.message)
        }
        Err(_) => BackendError::api(fallback(), format!("HTTP {status}")),
    }
}
