#![allow(dead_code)]

use ap_backend::{BackendClient, BackendError, BackendResult, Document, error_codes};
use ap_core::Identity;

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

pub const COLLECTION: &str = "users";

/// In-memory backend: documents in insertion order, sequential ids `u1`,
/// `u2`, ..., a call log and one-shot failure injection per operation.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    documents: Vec<Document>,
    next_id: u32,
    accounts: BTreeMap<String, String>,
    federated: Option<Identity>,
    failures: HashMap<&'static str, String>,
    calls: Vec<&'static str>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.lock()
            .accounts
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn with_federated_identity(self, identity: Identity) -> Self {
        self.lock().federated = Some(identity);
        self
    }

    pub fn with_document(self, id: &str, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.lock().documents.push(Document::new(id, fields));
        self
    }

    /// Make the next call to `operation` fail with `code`
    pub fn fail_next(&self, operation: &'static str, code: &str) {
        self.lock().failures.insert(operation, code.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == operation).count()
    }

    pub fn document(&self, id: &str) -> Option<Map<String, Value>> {
        self.lock()
            .documents
            .iter()
            .find(|doc| doc.id == id)
            .map(|doc| doc.fields.clone())
    }

    pub fn document_ids(&self) -> Vec<String> {
        self.lock().documents.iter().map(|d| d.id.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Record the call and return the injected failure, if any
    fn enter(&self, operation: &'static str) -> BackendResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.lock();
        state.calls.push(operation);
        match state.failures.remove(operation) {
            Some(code) => Err(BackendError::api(code, format!("injected {operation} failure"))),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl BackendClient for FakeBackend {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<Identity> {
        let state = self.enter("sign_in_with_password")?;
        match state.accounts.get(email) {
            Some(stored) if stored == password => {
                Ok(Identity::new(format!("uid-{email}"), Some(email.to_string())))
            }
            _ => Err(BackendError::api(
                error_codes::INVALID_CREDENTIAL,
                "INVALID_LOGIN_CREDENTIALS",
            )),
        }
    }

    async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Identity> {
        let mut state = self.enter("register_with_password")?;
        if state.accounts.contains_key(email) {
            return Err(BackendError::api(
                error_codes::EMAIL_ALREADY_IN_USE,
                "EMAIL_EXISTS",
            ));
        }
        state
            .accounts
            .insert(email.to_string(), password.to_string());
        Ok(Identity::new(format!("uid-{email}"), Some(email.to_string())))
    }

    async fn sign_in_with_federated_provider(
        &self,
        _provider_id: &str,
    ) -> BackendResult<Identity> {
        let state = self.enter("sign_in_with_federated_provider")?;
        state.federated.clone().ok_or_else(|| {
            BackendError::api(error_codes::POPUP_CLOSED_BY_USER, "popup closed")
        })
    }

    async fn sign_out(&self) -> BackendResult<()> {
        self.enter("sign_out")?;
        Ok(())
    }

    async fn list_all(&self, _collection: &str) -> BackendResult<Vec<Document>> {
        let state = self.enter("list_all")?;
        Ok(state.documents.clone())
    }

    async fn create(&self, _collection: &str, fields: Map<String, Value>) -> BackendResult<String> {
        let mut state = self.enter("create")?;
        state.next_id += 1;
        let id = format!("u{}", state.next_id);
        state.documents.push(Document::new(id.clone(), fields));
        Ok(id)
    }

    async fn update_by_id(
        &self,
        _collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<()> {
        let mut state = self.enter("update_by_id")?;
        let Some(doc) = state.documents.iter_mut().find(|doc| doc.id == id) else {
            return Err(BackendError::api("firestore/not-found", format!("no document {id}")));
        };
        doc.fields.extend(fields);
        Ok(())
    }

    async fn delete_by_id(&self, _collection: &str, id: &str) -> BackendResult<()> {
        let mut state = self.enter("delete_by_id")?;
        state.documents.retain(|doc| doc.id != id);
        Ok(())
    }
}

pub fn ana_document() -> Value {
    json!({
        "name": "Ana",
        "email": "ana@x.com",
        "role": "admin",
        "status": "active",
        "createdAt": "2024-03-01T10:00:00.000Z",
        "updatedAt": "2024-03-01T10:00:00.000Z",
    })
}
