use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Add a lesson to a course.
    Create {
        #[arg(long)]
        course: i64,
        #[arg(long)]
        title: String,
        /// Minutes.
        #[arg(long)]
        duration: u32,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// Update a lesson.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// Delete a lesson.
    Delete { id: i64 },
}
