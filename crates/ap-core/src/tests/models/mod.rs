mod identity;
mod role;
mod user_fields;
mod user_record;
mod user_status;
