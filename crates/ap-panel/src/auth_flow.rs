use crate::{Message, SessionController};

use ap_backend::{BackendClient, BackendResult, error_codes};
use ap_core::{Identity, Locale};

use log::{debug, warn};

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// Raw field values; `confirm_password` only matters in register mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Credentials handed out by [`AuthFlow::begin_password`] for the backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSubmission {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Identity handed to the session controller
    SignedIn,
    /// Local validation failed; nothing was sent
    Invalid(Message),
    /// Backend refused; field values are kept for a retry
    Rejected(Message),
    /// Federated flow dismissed by the user
    Cancelled(Message),
    /// Another submission is still in flight
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Password,
    Federated,
}

/// Login / registration form.
///
/// A submission is split in two: `begin_*` validates and marks the flow as
/// in flight, `finish` clears the flag and applies the backend result.
/// [`AuthFlow::submit`] and [`AuthFlow::submit_federated`] run both around
/// the backend call.
#[derive(Debug)]
pub struct AuthFlow {
    locale: Locale,
    mode: AuthMode,
    form: AuthForm,
    error: Option<Message>,
    pending: Option<Pending>,
}

impl AuthFlow {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            mode: AuthMode::default(),
            form: AuthForm::default(),
            error: None,
            pending: None,
        }
    }

    pub fn with_mode(mut self, mode: AuthMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    /// Current error, rendered in the flow's locale
    pub fn error(&self) -> Option<&'static str> {
        self.error.map(|message| message.text(self.locale))
    }

    pub fn error_message(&self) -> Option<Message> {
        self.error
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_in_flight()
    }

    /// Switch between login and registration. Ignored while in flight.
    pub fn set_mode(&mut self, mode: AuthMode) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.mode = mode;
        self.error = None;
        self.form.confirm_password.clear();
        true
    }

    /// Local checks, in order: all fields present, confirmation matches,
    /// minimum password length.
    pub fn validate(&self) -> Result<(), Message> {
        let AuthForm {
            email,
            password,
            confirm_password,
        } = &self.form;

        let missing = match self.mode {
            AuthMode::Login => email.is_empty() || password.is_empty(),
            AuthMode::Register => {
                email.is_empty() || password.is_empty() || confirm_password.is_empty()
            }
        };
        if missing {
            return Err(Message::MissingFields);
        }

        if self.mode == AuthMode::Register && password != confirm_password {
            return Err(Message::PasswordMismatch);
        }

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(Message::PasswordTooShort);
        }

        Ok(())
    }

    /// Validate and mark the flow as in flight
    pub fn begin_password(&mut self) -> Result<PasswordSubmission, AuthOutcome> {
        if self.is_in_flight() {
            return Err(AuthOutcome::Busy);
        }

        if let Err(message) = self.validate() {
            debug!("Rejected {} form locally: {message:?}", self.mode.as_str());
            self.error = Some(message);
            return Err(AuthOutcome::Invalid(message));
        }

        self.error = None;
        self.pending = Some(Pending::Password);

        Ok(PasswordSubmission {
            mode: self.mode,
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        })
    }

    /// Mark a federated attempt as in flight; no local validation applies
    pub fn begin_federated(&mut self) -> Result<(), AuthOutcome> {
        if self.is_in_flight() {
            return Err(AuthOutcome::Busy);
        }

        self.error = None;
        self.pending = Some(Pending::Federated);
        Ok(())
    }

    /// Clear the in-flight flag and apply the backend result
    pub fn finish(
        &mut self,
        result: BackendResult<Identity>,
        session: &mut SessionController,
    ) -> AuthOutcome {
        let pending = self.pending.take();

        match result {
            Ok(identity) => {
                session.complete_sign_in(identity);
                self.form = AuthForm::default();
                self.error = None;
                AuthOutcome::SignedIn
            }
            Err(e) => {
                let code = e.code();
                let message = Message::for_auth_code(code, self.mode);
                self.error = Some(message);

                if pending == Some(Pending::Federated) && error_codes::is_cancellation(code) {
                    debug!("Federated {} dismissed: {code}", self.mode.as_str());
                    AuthOutcome::Cancelled(message)
                } else {
                    warn!("{} failed: {e}", self.mode.as_str());
                    AuthOutcome::Rejected(message)
                }
            }
        }
    }

    pub async fn submit<B>(&mut self, backend: &B, session: &mut SessionController) -> AuthOutcome
    where
        B: BackendClient + ?Sized,
    {
        let submission = match self.begin_password() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = match submission.mode {
            AuthMode::Login => {
                backend
                    .sign_in_with_password(&submission.email, &submission.password)
                    .await
            }
            AuthMode::Register => {
                backend
                    .register_with_password(&submission.email, &submission.password)
                    .await
            }
        };

        self.finish(result, session)
    }

    pub async fn submit_federated<B>(
        &mut self,
        backend: &B,
        session: &mut SessionController,
        provider_id: &str,
    ) -> AuthOutcome
    where
        B: BackendClient + ?Sized,
    {
        if let Err(outcome) = self.begin_federated() {
            return outcome;
        }

        let result = backend.sign_in_with_federated_provider(provider_id).await;
        self.finish(result, session)
    }
}
