//! Interactive input: password prompt, delete confirmation and the federated
//! id token.

use crate::{CliError, CliResult};

use ap_backend::{BackendError, BackendResult, IdpTokenSource, error_codes};
use ap_panel::Confirm;

use async_trait::async_trait;
use dialoguer::{Confirm as ConfirmPrompt, Password};
use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};

pub fn read_password(prompt: &str) -> CliResult<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(CliError::prompt)
}

/// y/N confirmation on the terminal; a failed prompt counts as "no".
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed: {e}");
                false
            }
        }
    }
}

/// Reads the provider id token as one line from stdin.
///
/// An empty line or end of input means the user dismissed the flow.
pub struct StdinTokenSource;

#[async_trait]
impl IdpTokenSource for StdinTokenSource {
    async fn id_token(&self, provider_id: &str) -> BackendResult<Option<String>> {
        eprintln!("Paste the {provider_id} id token (empty line to cancel):");

        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|e| {
                BackendError::api(
                    error_codes::INTERNAL_ERROR,
                    format!("failed to read id token: {e}"),
                )
            })?;

        Ok(parse_token_line(&line))
    }
}

pub(crate) fn parse_token_line(line: &str) -> Option<String> {
    let token = line.trim();
    (!token.is_empty()).then(|| token.to_string())
}
