use crate::AuthMode;

use ap_backend::error_codes;
use ap_core::Locale;

/// Every user-facing text the panel produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    MissingFields,
    PasswordMismatch,
    PasswordTooShort,
    EmailAlreadyInUse,
    InvalidEmail,
    OperationNotAllowed,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    InvalidCredential,
    UserDisabled,
    TooManyRequests,
    FederatedCancelled(AuthMode),
    AuthFailed(AuthMode),
    ConfirmDelete,
    NoName,
    NotAvailable,
    NoUsers,
}

impl Message {
    /// Message for a coded auth failure; unmapped codes get the mode's
    /// generic fallback.
    pub fn for_auth_code(code: &str, mode: AuthMode) -> Self {
        match code {
            error_codes::EMAIL_ALREADY_IN_USE => Self::EmailAlreadyInUse,
            error_codes::INVALID_EMAIL => Self::InvalidEmail,
            error_codes::OPERATION_NOT_ALLOWED => Self::OperationNotAllowed,
            error_codes::WEAK_PASSWORD => Self::WeakPassword,
            error_codes::USER_NOT_FOUND => Self::UserNotFound,
            error_codes::WRONG_PASSWORD => Self::WrongPassword,
            error_codes::INVALID_CREDENTIAL => Self::InvalidCredential,
            error_codes::USER_DISABLED => Self::UserDisabled,
            error_codes::TOO_MANY_REQUESTS => Self::TooManyRequests,
            code if error_codes::is_cancellation(code) => Self::FederatedCancelled(mode),
            _ => Self::AuthFailed(mode),
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.spanish(),
            Locale::En => self.english(),
        }
    }

    fn spanish(self) -> &'static str {
        match self {
            Self::MissingFields => "Por favor, completa todos los campos",
            Self::PasswordMismatch => "Las contraseñas no coinciden",
            Self::PasswordTooShort => "La contraseña debe tener al menos 6 caracteres",
            Self::EmailAlreadyInUse => "Ya existe una cuenta con este email",
            Self::InvalidEmail => "El email no es válido",
            Self::OperationNotAllowed => "Operación no permitida",
            Self::WeakPassword => "La contraseña es muy débil",
            Self::UserNotFound => "No existe una cuenta con este email",
            Self::WrongPassword => "La contraseña es incorrecta",
            Self::InvalidCredential => "Email o contraseña incorrectos",
            Self::UserDisabled => "Esta cuenta ha sido deshabilitada",
            Self::TooManyRequests => "Demasiados intentos. Intenta más tarde",
            Self::FederatedCancelled(AuthMode::Register) => {
                "La ventana de Google se cerró antes de completar el registro"
            }
            Self::FederatedCancelled(AuthMode::Login) => {
                "La ventana de Google se cerró antes de completar el inicio de sesión"
            }
            Self::AuthFailed(AuthMode::Register) => "Error al registrar usuario. Intenta de nuevo",
            Self::AuthFailed(AuthMode::Login) => "Error al iniciar sesión. Intenta de nuevo",
            Self::ConfirmDelete => "¿Estás seguro de que quieres eliminar este usuario?",
            Self::NoName => "Sin nombre",
            Self::NotAvailable => "N/A",
            Self::NoUsers => "No hay usuarios registrados",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all fields",
            Self::PasswordMismatch => "Passwords do not match",
            Self::PasswordTooShort => "Password must be at least 6 characters",
            Self::EmailAlreadyInUse => "An account with this email already exists",
            Self::InvalidEmail => "The email address is not valid",
            Self::OperationNotAllowed => "Operation not allowed",
            Self::WeakPassword => "The password is too weak",
            Self::UserNotFound => "No account exists for this email",
            Self::WrongPassword => "The password is incorrect",
            Self::InvalidCredential => "Incorrect email or password",
            Self::UserDisabled => "This account has been disabled",
            Self::TooManyRequests => "Too many attempts. Try again later",
            Self::FederatedCancelled(AuthMode::Register) => {
                "The Google window was closed before registration completed"
            }
            Self::FederatedCancelled(AuthMode::Login) => {
                "The Google window was closed before sign-in completed"
            }
            Self::AuthFailed(AuthMode::Register) => "Could not register. Please try again",
            Self::AuthFailed(AuthMode::Login) => "Could not sign in. Please try again",
            Self::ConfirmDelete => "Are you sure you want to delete this user?",
            Self::NoName => "No name",
            Self::NotAvailable => "N/A",
            Self::NoUsers => "No users registered",
        }
    }
}
