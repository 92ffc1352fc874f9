use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// List every user record
    List,

    /// Create a user record
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Role: user or admin
        #[arg(long, default_value = "user", value_parser = ["user", "admin"])]
        role: String,

        /// Status: active or inactive
        #[arg(long, default_value = "active", value_parser = ["active", "inactive"])]
        status: String,
    },

    /// Update a user record; omitted fields keep their current value
    Update {
        /// Record id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Role: user or admin
        #[arg(long, value_parser = ["user", "admin"])]
        role: Option<String>,

        /// Status: active or inactive
        #[arg(long, value_parser = ["active", "inactive"])]
        status: Option<String>,
    },

    /// Delete a user record
    Delete {
        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
