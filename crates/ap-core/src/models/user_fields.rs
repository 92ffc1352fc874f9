use crate::{CoreError, Result as CoreErrorResult, Role, UserStatus, field, format_timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Editable attributes of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl UserFields {
    /// Name and email are mandatory
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("email is required"));
        }
        Ok(())
    }

    /// Document payload for a new record, stamping both timestamps with `now`.
    pub fn to_create_payload(&self, now: DateTime<Utc>) -> Map<String, Value> {
        let mut fields = self.to_fields();
        let stamp = Value::String(format_timestamp(now));
        fields.insert(field::CREATED_AT.to_string(), stamp.clone());
        fields.insert(field::UPDATED_AT.to_string(), stamp);
        fields
    }

    /// Document payload for an update; `createdAt` is left untouched.
    pub fn to_update_payload(&self, now: DateTime<Utc>) -> Map<String, Value> {
        let mut fields = self.to_fields();
        fields.insert(
            field::UPDATED_AT.to_string(),
            Value::String(format_timestamp(now)),
        );
        fields
    }

    fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(field::NAME.to_string(), Value::String(self.name.clone()));
        fields.insert(field::EMAIL.to_string(), Value::String(self.email.clone()));
        fields.insert(
            field::ROLE.to_string(),
            Value::String(self.role.as_str().to_string()),
        );
        fields.insert(
            field::STATUS.to_string(),
            Value::String(self.status.as_str().to_string()),
        );
        fields
    }
}
