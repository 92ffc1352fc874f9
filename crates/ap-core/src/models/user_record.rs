//! Managed row of the `users` collection.

use crate::{Role, UserFields, UserStatus, field};

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

/// A user record as stored by the document backend.
///
/// The id is assigned by the backend on creation and never changes. Both
/// timestamps are written by the panel at write time, not by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Build a record from raw document fields.
    ///
    /// Decoding is lenient: missing role/status fall back to their defaults,
    /// unreadable values are logged and replaced the same way.
    pub fn from_document(id: impl Into<String>, fields: &Map<String, Value>) -> Self {
        let id = id.into();

        let role = match string_field(fields, field::ROLE) {
            Some(raw) => Role::from_str(raw).unwrap_or_else(|e| {
                warn!("Record {id}: {e}, using default role");
                Role::default()
            }),
            None => Role::default(),
        };

        let status = match string_field(fields, field::STATUS) {
            Some(raw) => UserStatus::from_str(raw).unwrap_or_else(|e| {
                warn!("Record {id}: {e}, using default status");
                UserStatus::default()
            }),
            None => UserStatus::default(),
        };

        Self {
            name: string_field(fields, field::NAME).map(String::from),
            email: string_field(fields, field::EMAIL)
                .unwrap_or_default()
                .to_string(),
            role,
            status,
            created_at: timestamp_field(&id, fields, field::CREATED_AT),
            updated_at: timestamp_field(&id, fields, field::UPDATED_AT),
            id,
        }
    }

    /// Mutable subset, as copied into the edit form
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn timestamp_field(id: &str, fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = string_field(fields, key)?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(e) => {
            warn!("Record {id}: unreadable {key} '{raw}': {e}");
            None
        }
    }
}
