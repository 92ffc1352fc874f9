pub mod identity;
pub mod role;
pub mod user_fields;
pub mod user_record;
pub mod user_status;
