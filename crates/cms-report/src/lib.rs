//! # cms-report
//!
//! Aggregation engine for the admin dashboard and report pages.
//!
//! Every function here is pure: it takes entity slices, never mutates them,
//! and returns an owned, serializable report. Loading the slices is the
//! caller's job (see `cms-db`), which keeps each report a point-in-time
//! snapshot recomputed on every call.
//!
//! - [`dashboard`]: totals, newest courses, top-students ranking
//! - [`courses`]: per-course enrollment counts, category breakdown and
//!   detail, single-course detail, average rating
//! - [`students`]: full per-student enrollment overview
//! - [`reviews`]: per-course ratings and the high/low review split
//! - [`duration`]: lesson duration summation used by the course rollup

pub mod counts;
pub mod courses;
pub mod dashboard;
pub mod duration;
pub mod reviews;
pub mod settings;
pub mod students;

pub use courses::{
    CategoryBreakdown, CategoryCount, CategoryDetail, CourseDetail, average_rating,
    category_breakdown, category_detail, course_detail, course_enrollment_counts,
};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use reviews::{RatedCourse, ReviewOverview, review_overview};
pub use settings::ReportSettings;
pub use students::{StudentsOverview, students_overview};

#[cfg(test)]
pub(crate) mod fixtures;
