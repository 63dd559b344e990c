mod category;
mod course;
mod enrollment;
mod lesson;
mod review;
mod student;
mod user;

pub use category::CategoryCommands;
pub use course::CourseCommands;
pub use enrollment::EnrollmentCommands;
pub use lesson::LessonCommands;
pub use review::ReviewCommands;
pub use student::StudentCommands;
pub use user::UserCommands;
