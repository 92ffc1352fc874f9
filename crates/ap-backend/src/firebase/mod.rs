pub(crate) mod auth_api;
pub(crate) mod client;
pub(crate) mod firestore_value;
pub(crate) mod idp_token_source;
