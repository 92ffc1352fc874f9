//! admin-panel - manage the `users` collection from the command line
//!
//! # Examples
//!
//! ```bash
//! # List every user record
//! admin-panel users list --login-email admin@example.com --pretty
//!
//! # Create a record
//! admin-panel users create --login-email admin@example.com \
//!     --name Ana --email ana@example.com --role admin
//!
//! # Delete without the confirmation prompt
//! admin-panel users delete <id> --login-email admin@example.com --yes
//! ```

use ap_backend::FirebaseClient;
use ap_cli::{Cli, CliError, CliResult, StdinTokenSource, TerminalConfirm, execute, logger};
use ap_config::Config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = log_file_path(&config, &config_dir)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting admin-panel v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client =
        FirebaseClient::new(&config.backend)?.with_idp_token_source(Arc::new(StdinTokenSource));

    let pretty = cli.pretty;
    let value = execute(cli, &config, &client, &TerminalConfirm).await?;

    let output = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    Ok(())
}

fn log_file_path(config: &Config, config_dir: &Path) -> CliResult<Option<PathBuf>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let log_dir = config_dir.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        CliError::io(
            format!("Failed to create log directory {}", log_dir.display()),
            e,
        )
    })?;

    Ok(Some(log_dir.join(filename)))
}
