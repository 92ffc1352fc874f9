use ap_backend::{BackendClient, BackendResult};
use ap_core::Identity;

use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Top-level screen selected by the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Registration / login
    Auth,
    Dashboard,
}

/// Holds at most one authenticated identity.
#[derive(Debug, Default)]
pub struct SessionController {
    identity: Option<Identity>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match self.identity {
            Some(_) => SessionState::Authenticated,
            None => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn view(&self) -> View {
        match self.state() {
            SessionState::Unauthenticated => View::Auth,
            SessionState::Authenticated => View::Dashboard,
        }
    }

    /// Unauthenticated -> Authenticated.
    ///
    /// Not guarded: a second call simply replaces the identity.
    pub fn complete_sign_in(&mut self, identity: Identity) {
        info!("Session started for {}", identity.uid);
        self.identity = Some(identity);
    }

    /// Authenticated -> Unauthenticated, once the backend confirms.
    ///
    /// On failure the identity is kept and the error is logged and returned;
    /// the session still looks signed in.
    pub async fn sign_out<B>(&mut self, backend: &B) -> BackendResult<()>
    where
        B: BackendClient + ?Sized,
    {
        match backend.sign_out().await {
            Ok(()) => {
                if let Some(identity) = self.identity.take() {
                    info!("Session ended for {}", identity.uid);
                }
                Ok(())
            }
            Err(e) => {
                error!("Sign-out failed: {e}");
                Err(e)
            }
        }
    }
}
