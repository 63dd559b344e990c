use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user account.
    Create {
        username: String,
        /// student, instructor or admin.
        #[arg(long, default_value = "student")]
        role: String,
    },
}
