//! Dashboard summary: totals, newest courses and the top-students ranking.

use std::collections::BTreeMap;

use cms_core::entities::{Course, Enrollment, User};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::{completed_by_user, enrollments_by_user};
use crate::settings::ReportSettings;

/// Admin landing-page summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSummary {
    pub total_courses: usize,
    pub total_students: usize,
    pub total_enrollments: usize,
    /// Newest courses first, by descending id.
    pub recent_courses: Vec<Course>,
    /// Students ranked by enrollment count, stable on ties.
    pub top_students: Vec<User>,
    pub enrollment_count_by_student: BTreeMap<i64, usize>,
    pub completed_count_by_student: BTreeMap<i64, usize>,
}

/// Build the dashboard summary.
///
/// `users` may contain non-students; only `role == student` users are
/// counted and ranked. `total_enrollments` counts every enrollment.
#[must_use]
pub fn dashboard_summary(
    courses: &[Course],
    users: &[User],
    enrollments: &[Enrollment],
    settings: &ReportSettings,
) -> DashboardSummary {
    let students: Vec<User> = users.iter().filter(|u| u.is_student()).cloned().collect();

    let enrollment_count_by_student = enrollments_by_user(&students, enrollments);
    let completed_count_by_student = completed_by_user(&students, enrollments);

    let mut recent_courses = courses.to_vec();
    recent_courses.sort_by(|a, b| b.id.cmp(&a.id));
    recent_courses.truncate(settings.recent_courses);

    let top_students = rank_students(&students, &enrollment_count_by_student, settings.top_students);

    tracing::debug!(
        courses = courses.len(),
        students = students.len(),
        enrollments = enrollments.len(),
        "computed dashboard summary"
    );

    DashboardSummary {
        total_courses: courses.len(),
        total_students: students.len(),
        total_enrollments: enrollments.len(),
        recent_courses,
        top_students,
        enrollment_count_by_student,
        completed_count_by_student,
    }
}

/// Descending by count. `sort_by` is stable, so ties keep input order.
fn rank_students(students: &[User], counts: &BTreeMap<i64, usize>, limit: usize) -> Vec<User> {
    let count_of = |u: &User| counts.get(&u.id).copied().unwrap_or(0);
    let mut ranked = students.to_vec();
    ranked.sort_by(|a, b| count_of(b).cmp(&count_of(a)));
    ranked.truncate(limit);
    ranked
}
