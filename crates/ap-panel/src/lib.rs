//! Admin panel state machines.
//!
//! Three components, each an owned struct mutated only through its
//! operations:
//!
//! - [`SessionController`]: which identity (if any) is signed in, and so
//!   which top-level [`View`] is shown.
//! - [`AuthFlow`]: login/registration form with local validation and coded
//!   failure mapping.
//! - [`Dashboard`]: the user-record list plus its create/edit form. Every
//!   mutation is followed by a full re-fetch; nothing is applied
//!   optimistically.
//!
//! All backend access goes through a borrowed [`ap_backend::BackendClient`].

pub(crate) mod auth_flow;
pub(crate) mod confirm;
pub(crate) mod dashboard;
pub(crate) mod messages;
pub(crate) mod session;


pub use auth_flow::{AuthFlow, AuthForm, AuthMode, AuthOutcome, PasswordSubmission};
pub use confirm::Confirm;
pub use dashboard::{Dashboard, FormState, RecordRow, RemoveOutcome, SubmitOutcome};
pub use messages::Message;
pub use session::{SessionController, SessionState, View};
