use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cms` binary.
#[derive(Debug, Parser)]
#[command(name = "cms", version, about = "Course admin dashboard and reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Database path (overrides `[database] path`)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            db: self.db.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{CategoryCommands, CourseCommands, LessonCommands, ReviewCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["cms", "--format", "table", "--db", ":memory:", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.global_flags().db.as_deref(), Some(":memory:"));
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cms", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["cms", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn course_create_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "cms",
            "course",
            "create",
            "--name",
            "Rust 101",
            "--category",
            "Programming",
            "--skill-level",
            "beginner",
            "--duration",
            "90",
            "--status",
            "published",
        ])
        .expect("cli should parse");

        let Commands::Course {
            action: CourseCommands::Create {
                name,
                duration,
                status,
                ..
            },
        } = cli.command
        else {
            panic!("expected course create");
        };
        assert_eq!(name, "Rust 101");
        assert_eq!(duration, 90);
        assert_eq!(status.as_deref(), Some("published"));
    }

    #[test]
    fn category_get_takes_slug() {
        let cli = Cli::try_parse_from(["cms", "category", "get", "web-development"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Category { action: CategoryCommands::Get { ref slug } } if slug == "web-development"
        ));
    }

    #[test]
    fn lesson_create_requires_course() {
        assert!(Cli::try_parse_from(["cms", "lesson", "create", "--title", "x", "--duration", "5"]).is_err());

        let cli = Cli::try_parse_from([
            "cms", "lesson", "create", "--course", "3", "--title", "Intro", "--duration", "30",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Lesson { action: LessonCommands::Create { course: 3, duration: 30, .. } }
        ));
    }

    #[test]
    fn review_create_parses_rating() {
        let cli = Cli::try_parse_from(["cms", "review", "create", "--course", "1", "--rating", "4"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Review { action: ReviewCommands::Create { course: 1, rating: 4, .. } }
        ));
    }
}
