//! Entity structs for all domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `cms-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod course;
mod enrollment;
mod lesson;
mod review;
mod user;

pub use course::{Course, NewCourse, ValidCourse};
pub use enrollment::{COMPLETED_STATUS, Enrollment};
pub use lesson::{Lesson, NewLesson, validate_title};
pub use review::{MAX_RATING, MIN_RATING, Review, validate_rating};
pub use user::User;
