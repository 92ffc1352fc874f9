use crate::commands::Commands;

use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(name = "admin-panel")]
#[command(about = "Administrator panel for the users collection")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub auth: AuthArgs,

    /// Configuration directory (default: AP_CONFIG_DIR or ./.admin-panel)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// How `login` and the `users` commands sign in.
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Administrator email
    #[arg(long, global = true)]
    pub login_email: Option<String>,

    /// Administrator password (prompted when omitted)
    #[arg(long, global = true)]
    pub login_password: Option<String>,

    /// Sign in with Google; the id token is read from stdin
    #[arg(long, global = true, conflicts_with_all = ["login_email", "login_password"])]
    pub google: bool,
}
