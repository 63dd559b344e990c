use clap::Subcommand;

use crate::cli::subcommands::{
    CategoryCommands, CourseCommands, EnrollmentCommands, LessonCommands, ReviewCommands,
    StudentCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Admin dashboard summary.
    Dashboard,
    /// Courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Category breakdown and per-category courses.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Lessons (course durations follow automatically).
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Students and their enrollments.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// User accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Enrollments.
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },
    /// Reviews and the rating overview.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
}
