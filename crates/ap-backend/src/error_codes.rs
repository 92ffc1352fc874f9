//! Coded failure categories, named after the hosted SDK's error codes.

pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
pub const INVALID_EMAIL: &str = "auth/invalid-email";
pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";
pub const WEAK_PASSWORD: &str = "auth/weak-password";
pub const USER_NOT_FOUND: &str = "auth/user-not-found";
pub const WRONG_PASSWORD: &str = "auth/wrong-password";
pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
pub const USER_DISABLED: &str = "auth/user-disabled";
pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
pub const INTERNAL_ERROR: &str = "auth/internal-error";
pub const OPERATION_NOT_SUPPORTED: &str = "auth/operation-not-supported-in-this-environment";

pub const POPUP_CLOSED_BY_USER: &str = "auth/popup-closed-by-user";
pub const CANCELLED_POPUP_REQUEST: &str = "auth/cancelled-popup-request";
pub const USER_CANCELLED: &str = "auth/user-cancelled";

pub const INVALID_DOCUMENT_ID: &str = "firestore/invalid-argument";

pub const NETWORK_REQUEST_FAILED: &str = "network-request-failed";
pub const INVALID_RESPONSE: &str = "invalid-response";

/// Whether the code means the user dismissed a federated sign-in
pub fn is_cancellation(code: &str) -> bool {
    matches!(
        code,
        POPUP_CLOSED_BY_USER | CANCELLED_POPUP_REQUEST | USER_CANCELLED
    )
}

/// Map an Identity Toolkit REST error message (e.g. `EMAIL_EXISTS` or
/// `WEAK_PASSWORD : Password should be at least 6 characters`) to a code.
pub fn from_identity_toolkit(message: &str) -> &'static str {
    let key = message
        .split([' ', ':'])
        .next()
        .unwrap_or_default();

    match key {
        "EMAIL_EXISTS" => EMAIL_ALREADY_IN_USE,
        "INVALID_EMAIL" | "MISSING_EMAIL" => INVALID_EMAIL,
        "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => OPERATION_NOT_ALLOWED,
        "WEAK_PASSWORD" => WEAK_PASSWORD,
        "EMAIL_NOT_FOUND" => USER_NOT_FOUND,
        "INVALID_PASSWORD" => WRONG_PASSWORD,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_IDP_RESPONSE" => INVALID_CREDENTIAL,
        "USER_DISABLED" => USER_DISABLED,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => TOO_MANY_REQUESTS,
        _ => INTERNAL_ERROR,
    }
}

/// Map a Firestore `status` (e.g. `NOT_FOUND`) to `firestore/not-found`.
pub fn from_firestore_status(status: &str) -> String {
    format!("firestore/{}", status.to_lowercase().replace('_', "-"))
}
