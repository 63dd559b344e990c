use clap::Subcommand;

/// Enrollment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnrollmentCommands {
    /// Enroll a user in a course.
    Create {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        course: i64,
        /// Free text; "completed" (any case) counts as completed.
        #[arg(long, default_value = "enrolled")]
        status: String,
    },
}
