use crate::{AuthArgs, Cli, CliError, CliResult, Commands, UsersCommands, prompt};

use ap_backend::{BackendClient, GOOGLE_PROVIDER_ID};
use ap_config::Config;
use ap_core::{Locale, Role, UserFields, UserStatus};
use ap_panel::{
    AuthFlow, AuthMode, AuthOutcome, Confirm, Dashboard, Message, RemoveOutcome,
    SessionController, SubmitOutcome,
};

use std::str::FromStr;

use log::{info, warn};
use serde_json::{Value, json};

/// Run one command against `backend` and return its JSON output.
///
/// Commands that touch the dashboard sign in first; every command ends with
/// a sign-out when a session was opened.
pub async fn execute<B>(
    cli: Cli,
    config: &Config,
    backend: &B,
    confirm: &dyn Confirm,
) -> CliResult<Value>
where
    B: BackendClient + ?Sized,
{
    let locale = config.ui.locale;
    let mut session = SessionController::new();

    let result = match cli.command {
        Commands::Login => sign_in(&cli.auth, locale, backend, &mut session)
            .await
            .and_then(|()| identity_json(&session)),

        Commands::Register {
            email,
            password,
            confirm_password,
        } => {
            let mut flow = AuthFlow::new(locale).with_mode(AuthMode::Register);
            let form = flow.form_mut();
            form.email = email;
            form.password = password;
            form.confirm_password = confirm_password;

            let outcome = flow.submit(backend, &mut session).await;
            check_outcome(outcome, locale).and_then(|()| identity_json(&session))
        }

        Commands::Google => {
            let outcome = AuthFlow::new(locale)
                .submit_federated(backend, &mut session, GOOGLE_PROVIDER_ID)
                .await;
            check_outcome(outcome, locale).and_then(|()| identity_json(&session))
        }

        Commands::Users { action } => {
            match sign_in(&cli.auth, locale, backend, &mut session).await {
                Ok(()) => {
                    let mut dashboard = Dashboard::new(&config.dashboard.collection, locale);
                    run_users(action, &mut dashboard, backend, confirm).await
                }
                Err(e) => Err(e),
            }
        }
    };

    if session.is_authenticated()
        && let Err(e) = session.sign_out(backend).await
    {
        warn!("Session was not closed cleanly: {e}");
    }

    result
}

async fn run_users<B>(
    action: UsersCommands,
    dashboard: &mut Dashboard,
    backend: &B,
    confirm: &dyn Confirm,
) -> CliResult<Value>
where
    B: BackendClient + ?Sized,
{
    match action {
        UsersCommands::List => {
            dashboard.refresh(backend).await?;
            if dashboard.is_empty() {
                eprintln!("{}", Message::NoUsers.text(dashboard.locale()));
            }
            Ok(serde_json::to_value(dashboard.records())?)
        }

        UsersCommands::Create {
            name,
            email,
            role,
            status,
        } => {
            dashboard.begin_create();
            dashboard.form_mut().fields = UserFields {
                name,
                email,
                role: Role::from_str(&role)?,
                status: UserStatus::from_str(&status)?,
            };
            let outcome = dashboard.submit(backend).await;
            saved_record(dashboard, outcome)
        }

        UsersCommands::Update {
            id,
            name,
            email,
            role,
            status,
        } => {
            dashboard.refresh(backend).await?;
            let record = dashboard
                .find(&id)
                .cloned()
                .ok_or_else(|| CliError::not_found(&id))?;

            dashboard.begin_edit(&record);
            let fields = &mut dashboard.form_mut().fields;
            if let Some(name) = name {
                fields.name = name;
            }
            if let Some(email) = email {
                fields.email = email;
            }
            if let Some(ref role) = role {
                fields.role = Role::from_str(role)?;
            }
            if let Some(ref status) = status {
                fields.status = UserStatus::from_str(status)?;
            }

            let outcome = dashboard.submit(backend).await;
            saved_record(dashboard, outcome)
        }

        UsersCommands::Delete { id, yes } => {
            let accept_all = |_: &str| true;
            let confirm: &dyn Confirm = if yes { &accept_all } else { confirm };

            match dashboard.remove(backend, &id, confirm).await {
                RemoveOutcome::Deleted => Ok(json!({ "id": id, "deleted": true })),
                RemoveOutcome::Declined => {
                    info!("Deletion of {id} declined");
                    Ok(json!({ "id": id, "deleted": false }))
                }
                RemoveOutcome::Failed(e) => Err(e.into()),
            }
        }
    }
}

async fn sign_in<B>(
    auth: &AuthArgs,
    locale: Locale,
    backend: &B,
    session: &mut SessionController,
) -> CliResult<()>
where
    B: BackendClient + ?Sized,
{
    let mut flow = AuthFlow::new(locale);

    let outcome = if auth.google {
        flow.submit_federated(backend, session, GOOGLE_PROVIDER_ID)
            .await
    } else {
        let email = auth
            .login_email
            .clone()
            .ok_or_else(|| CliError::usage("--login-email or --google is required"))?;
        let password = match auth.login_password {
            Some(ref password) => password.clone(),
            None => prompt::read_password(&format!("Password for {email}"))?,
        };

        let form = flow.form_mut();
        form.email = email;
        form.password = password;
        flow.submit(backend, session).await
    };

    check_outcome(outcome, locale)
}

fn check_outcome(outcome: AuthOutcome, locale: Locale) -> CliResult<()> {
    match outcome {
        AuthOutcome::SignedIn => Ok(()),
        AuthOutcome::Invalid(message) | AuthOutcome::Rejected(message) => Err(CliError::Auth {
            message: message.text(locale).to_string(),
        }),
        AuthOutcome::Cancelled(message) => Err(CliError::Cancelled {
            message: message.text(locale).to_string(),
        }),
        AuthOutcome::Busy => Err(CliError::usage("a sign-in is already in progress")),
    }
}

fn identity_json(session: &SessionController) -> CliResult<Value> {
    Ok(serde_json::to_value(session.identity())?)
}

/// The stored record after a successful submit, or just its id if the
/// post-write refresh did not bring it back.
fn saved_record(dashboard: &Dashboard, outcome: SubmitOutcome) -> CliResult<Value> {
    match outcome {
        SubmitOutcome::Created { id } | SubmitOutcome::Updated { id } => {
            match dashboard.find(&id) {
                Some(record) => Ok(serde_json::to_value(record)?),
                None => Ok(json!({ "id": id })),
            }
        }
        SubmitOutcome::Invalid(e) => Err(e.into()),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}
