pub mod error;
pub mod locale;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use locale::Locale;
pub use models::identity::Identity;
pub use models::role::Role;
pub use models::user_fields::UserFields;
pub use models::user_record::{UserRecord, format_timestamp};
pub use models::user_status::UserStatus;

/// Document field keys used by the `users` collection.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const STATUS: &str = "status";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}
