use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// Course count for each of the five categories.
    List,
    /// Courses in one category, by slug (e.g. web-development).
    Get { slug: String },
}
