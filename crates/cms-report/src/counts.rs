//! Enrollment tallies keyed by entity id.
//!
//! Every key in the input set appears in the output, so a zero count is a
//! value and never an absent entry.

use std::collections::BTreeMap;

use cms_core::entities::{Course, Enrollment, User};

/// Enrollments per course, for every course in `courses`.
#[must_use]
pub fn enrollments_by_course(courses: &[Course], enrollments: &[Enrollment]) -> BTreeMap<i64, usize> {
    let mut counts: BTreeMap<i64, usize> = courses.iter().map(|c| (c.id, 0)).collect();
    for enrollment in enrollments {
        if let Some(count) = counts.get_mut(&enrollment.course_id) {
            *count += 1;
        }
    }
    counts
}

/// Enrollments per user, for every user in `users`.
#[must_use]
pub fn enrollments_by_user(users: &[User], enrollments: &[Enrollment]) -> BTreeMap<i64, usize> {
    tally_users(users, enrollments, |_| true)
}

/// Completed enrollments per user, for every user in `users`.
#[must_use]
pub fn completed_by_user(users: &[User], enrollments: &[Enrollment]) -> BTreeMap<i64, usize> {
    tally_users(users, enrollments, Enrollment::is_completed)
}

fn tally_users(
    users: &[User],
    enrollments: &[Enrollment],
    include: impl Fn(&Enrollment) -> bool,
) -> BTreeMap<i64, usize> {
    let mut counts: BTreeMap<i64, usize> = users.iter().map(|u| (u.id, 0)).collect();
    for enrollment in enrollments.iter().filter(|e| include(e)) {
        if let Some(count) = counts.get_mut(&enrollment.user_id) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{course, enrollment, student};
    use cms_core::enums::Category;

    #[test]
    fn zero_counts_are_present() {
        let courses = vec![course(1, Category::Programming), course(2, Category::DataScience)];
        let enrollments = vec![enrollment(1, 10, 1, "active")];

        let counts = enrollments_by_course(&courses, &enrollments);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&1], 1);
        assert_eq!(counts[&2], 0);
    }

    #[test]
    fn enrollments_for_unknown_keys_are_ignored() {
        let users = vec![student(10, "ada")];
        let enrollments = vec![
            enrollment(1, 10, 1, "Completed"),
            enrollment(2, 99, 1, "completed"),
            enrollment(3, 10, 2, "in_progress"),
        ];

        assert_eq!(enrollments_by_user(&users, &enrollments)[&10], 2);
        assert_eq!(completed_by_user(&users, &enrollments)[&10], 1);
        assert!(!enrollments_by_user(&users, &enrollments).contains_key(&99));
    }
}
