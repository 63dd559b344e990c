use clap::Subcommand;

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Per-course ratings and the high/low split.
    List,
    /// Review a course.
    Create {
        #[arg(long)]
        course: i64,
        /// 1 to 5.
        #[arg(long)]
        rating: i64,
        #[arg(long, default_value = "")]
        body: String,
    },
}
