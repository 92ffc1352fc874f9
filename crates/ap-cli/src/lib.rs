//! admin-panel CLI library
//!
//! Argument parsing, logger setup and command execution. The binary in
//! `main.rs` only wires these to the Firebase client and the terminal.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod prompt;
pub(crate) mod runner;
pub(crate) mod users_commands;


pub use cli::{AuthArgs, Cli};
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use prompt::{StdinTokenSource, TerminalConfirm, read_password};
pub use runner::execute;
pub use users_commands::UsersCommands;
