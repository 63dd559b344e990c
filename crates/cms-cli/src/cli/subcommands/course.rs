use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses with enrollment counts.
    List,
    /// Course detail: lessons, reviews, rating, enrollments.
    Get { id: i64 },
    /// Create a course.
    Create {
        #[arg(long)]
        name: String,
        /// Display name, e.g. "Web Development".
        #[arg(long)]
        category: String,
        /// beginner, intermediate or advanced.
        #[arg(long)]
        skill_level: String,
        /// Minutes, greater than 0.
        #[arg(long)]
        duration: i64,
        /// draft (default) or published.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Update a course.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        skill_level: Option<String>,
        /// Only accepted while the course has no lessons.
        #[arg(long)]
        duration: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Flip between draft and published.
    ToggleStatus { id: i64 },
    /// Delete a course with its lessons, enrollments and reviews.
    Delete { id: i64 },
}
