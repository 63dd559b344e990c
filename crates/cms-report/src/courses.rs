//! Course-centric reports: enrollment counts, category breakdown and detail,
//! single-course detail and average rating.

use std::collections::BTreeMap;

use cms_core::entities::{Course, Enrollment, Lesson, Review};
use cms_core::enums::{Category, to_canonical};
use cms_core::errors::CoreError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::enrollments_by_course;

/// Number of courses in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCount {
    pub category: Category,
    pub slug: String,
    pub course_count: usize,
}

/// One entry per category, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryCount>,
    pub total_courses: usize,
}

/// Courses belonging to one category, looked up by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDetail {
    /// Canonical display name, or the slug itself when unrecognized.
    pub category: String,
    pub slug: String,
    pub courses: Vec<Course>,
    pub course_count: usize,
    pub enrollment_count_by_course: BTreeMap<i64, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseDetail {
    pub course: Course,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub enrollment_count: usize,
    pub lessons: Vec<Lesson>,
    pub lesson_count: usize,
}

/// Enrollment count for every course, zero included.
#[must_use]
pub fn course_enrollment_counts(courses: &[Course], enrollments: &[Enrollment]) -> BTreeMap<i64, usize> {
    enrollments_by_course(courses, enrollments)
}

/// Course count per category. Always five entries summing to `courses.len()`.
#[must_use]
pub fn category_breakdown(courses: &[Course]) -> CategoryBreakdown {
    let entries = Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            slug: category.slug().to_string(),
            course_count: courses.iter().filter(|c| c.category == category).count(),
        })
        .collect();

    CategoryBreakdown {
        entries,
        total_courses: courses.len(),
    }
}

/// Courses whose category matches `slug` after canonicalization.
///
/// A value that is not a known slug is not an error: it passes through
/// unchanged and is compared against display names, so `"Web Development"`
/// selects the same courses as `"web-development"` while `"unknown-slug"`
/// selects none.
#[must_use]
pub fn category_detail(slug: &str, courses: &[Course], enrollments: &[Enrollment]) -> CategoryDetail {
    let category = to_canonical(slug);
    let matching: Vec<Course> = courses
        .iter()
        .filter(|c| c.category.name() == category)
        .cloned()
        .collect();
    let enrollment_count_by_course = enrollments_by_course(&matching, enrollments);

    tracing::debug!(slug, category = %category, courses = matching.len(), "computed category detail");

    CategoryDetail {
        category,
        slug: slug.to_string(),
        course_count: matching.len(),
        courses: matching,
        enrollment_count_by_course,
    }
}

/// Detail view for `course_id`.
///
/// The related slices may hold rows for other courses; only those referencing
/// `course_id` are kept.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when no course in `courses` has `course_id`.
pub fn course_detail(
    course_id: i64,
    courses: &[Course],
    reviews: &[Review],
    enrollments: &[Enrollment],
    lessons: &[Lesson],
) -> Result<CourseDetail, CoreError> {
    let course = courses
        .iter()
        .find(|c| c.id == course_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("course", course_id))?;

    let reviews: Vec<Review> = reviews.iter().filter(|r| r.course_id == course_id).cloned().collect();
    let lessons: Vec<Lesson> = lessons.iter().filter(|l| l.course_id == course_id).cloned().collect();
    let enrollment_count = enrollments.iter().filter(|e| e.course_id == course_id).count();

    Ok(CourseDetail {
        average_rating: average_rating(course_id, &reviews),
        lesson_count: lessons.len(),
        course,
        reviews,
        enrollment_count,
        lessons,
    })
}

/// Mean rating of `course_id`'s reviews, `0.0` when it has none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(course_id: i64, reviews: &[Review]) -> f64 {
    let (sum, count) = reviews
        .iter()
        .filter(|r| r.course_id == course_id)
        .fold((0_i64, 0_usize), |(sum, count), r| (sum + r.rating, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
