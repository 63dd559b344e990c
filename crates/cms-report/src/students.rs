use std::collections::BTreeMap;

use cms_core::entities::{Enrollment, User};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::enrollments_by_user;

/// Every student with their enrollments. Unranked and untruncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentsOverview {
    pub students: Vec<User>,
    pub total_students: usize,
    pub enrollments_by_student: BTreeMap<i64, Vec<Enrollment>>,
    pub enrollment_count_by_student: BTreeMap<i64, usize>,
}

#[must_use]
pub fn students_overview(users: &[User], enrollments: &[Enrollment]) -> StudentsOverview {
    let students: Vec<User> = users.iter().filter(|u| u.is_student()).cloned().collect();

    let mut enrollments_by_student: BTreeMap<i64, Vec<Enrollment>> =
        students.iter().map(|s| (s.id, Vec::new())).collect();
    for enrollment in enrollments {
        if let Some(list) = enrollments_by_student.get_mut(&enrollment.user_id) {
            list.push(enrollment.clone());
        }
    }

    StudentsOverview {
        total_students: students.len(),
        enrollment_count_by_student: enrollments_by_user(&students, enrollments),
        enrollments_by_student,
        students,
    }
}
