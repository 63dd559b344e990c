use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// All students with their enrollments.
    List,
    /// Delete a student and their enrollments.
    Delete { id: i64 },
}
