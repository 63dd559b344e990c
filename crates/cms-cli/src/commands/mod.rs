pub mod category;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod enrollment;
pub mod lesson;
pub mod review;
pub mod student;
pub mod user;
