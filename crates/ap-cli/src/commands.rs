use crate::users_commands::UsersCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password and print the identity
    Login,

    /// Create an administrator account
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Sign in with Google and print the identity
    Google,

    /// User record operations
    Users {
        #[command(subcommand)]
        action: UsersCommands,
    },
}
