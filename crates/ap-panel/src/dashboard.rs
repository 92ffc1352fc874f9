use crate::{Confirm, Message};

use ap_backend::{BackendClient, BackendError, BackendResult, Document};
use ap_core::{CoreError, Locale, UserFields, UserRecord};

use chrono::Utc;
use log::{debug, error, info, warn};
use serde::Serialize;

/// Create/edit form; `editing` holds the target id in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: UserFields,
    pub editing: Option<String>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// Display projection of a [`UserRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Created { id: String },
    Updated { id: String },
    /// Form rejected locally; nothing was sent
    Invalid(CoreError),
    /// Backend write failed; form and modal are left as they were
    Failed(BackendError),
}

#[derive(Debug)]
pub enum RemoveOutcome {
    Declined,
    Deleted,
    Failed(BackendError),
}

/// List of user records plus the create/edit modal.
///
/// The list is only ever replaced wholesale by a refresh.
#[derive(Debug)]
pub struct Dashboard {
    collection: String,
    locale: Locale,
    records: Vec<UserRecord>,
    loading: bool,
    modal_open: bool,
    form: FormState,
}

impl Dashboard {
    pub fn new(collection: impl Into<String>, locale: Locale) -> Self {
        Self {
            collection: collection.into(),
            locale,
            records: Vec::new(),
            loading: false,
            modal_open: false,
            form: FormState::default(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn rows(&self, locale: Locale) -> Vec<RecordRow> {
        self.records
            .iter()
            .map(|record| RecordRow {
                id: record.id.clone(),
                name: match record.name.as_deref() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => Message::NoName.text(locale).to_string(),
                },
                email: record.email.clone(),
                role: record.role.label(locale).to_string(),
                status: record.status.label(locale).to_string(),
                created: record
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| Message::NotAvailable.text(locale).to_string()),
            })
            .collect()
    }

    pub fn start_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply a list result. No fencing: whichever call finishes last wins.
    pub fn finish_refresh(&mut self, result: BackendResult<Vec<Document>>) -> BackendResult<()> {
        self.loading = false;

        match result {
            Ok(documents) => {
                self.records = documents
                    .iter()
                    .map(|doc| UserRecord::from_document(doc.id.as_str(), &doc.fields))
                    .collect();
                debug!("Loaded {} records from {}", self.records.len(), self.collection);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load {}: {e}", self.collection);
                Err(e)
            }
        }
    }

    pub async fn refresh<B>(&mut self, backend: &B) -> BackendResult<()>
    where
        B: BackendClient + ?Sized,
    {
        self.start_refresh();
        let result = backend.list_all(&self.collection).await;
        self.finish_refresh(result)
    }

    pub fn begin_create(&mut self) {
        self.form = FormState::default();
        self.modal_open = true;
    }

    pub fn begin_edit(&mut self, record: &UserRecord) {
        self.form = FormState {
            fields: record.fields(),
            editing: Some(record.id.clone()),
        };
        self.modal_open = true;
    }

    /// Reset the form and close the modal
    pub fn cancel(&mut self) {
        self.form = FormState::default();
        self.modal_open = false;
    }

    /// Write the form: update in edit mode, create otherwise.
    ///
    /// Success refreshes the list and resets the form. Failure is logged and
    /// leaves the modal open with its current values.
    pub async fn submit<B>(&mut self, backend: &B) -> SubmitOutcome
    where
        B: BackendClient + ?Sized,
    {
        if let Err(e) = self.form.fields.validate() {
            warn!("User form rejected: {e}");
            return SubmitOutcome::Invalid(e);
        }

        let now = Utc::now();
        let result = match self.form.editing.clone() {
            Some(id) => {
                let payload = self.form.fields.to_update_payload(now);
                let updated = backend.update_by_id(&self.collection, &id, payload).await;
                updated.map(|()| SubmitOutcome::Updated { id })
            }
            None => {
                let payload = self.form.fields.to_create_payload(now);
                backend
                    .create(&self.collection, payload)
                    .await
                    .map(|id| SubmitOutcome::Created { id })
            }
        };

        match result {
            Ok(outcome) => {
                info!("Saved user: {outcome:?}");
                // Refresh failures are logged inside refresh
                let _ = self.refresh(backend).await;
                self.cancel();
                outcome
            }
            Err(e) => {
                error!("Failed to save user: {e}");
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Delete after explicit confirmation; a declined prompt sends nothing.
    pub async fn remove<B, C>(&mut self, backend: &B, id: &str, confirm: &C) -> RemoveOutcome
    where
        B: BackendClient + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(Message::ConfirmDelete.text(self.locale)) {
            debug!("Deletion of {id} declined");
            return RemoveOutcome::Declined;
        }

        match backend.delete_by_id(&self.collection, id).await {
            Ok(()) => {
                info!("Deleted user {id}");
                let _ = self.refresh(backend).await;
                RemoveOutcome::Deleted
            }
            Err(e) => {
                error!("Failed to delete user {id}: {e}");
                RemoveOutcome::Failed(e)
            }
        }
    }
}
