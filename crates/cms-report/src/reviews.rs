//! Review overview: per-course average ratings and the high/low split.

use std::collections::BTreeMap;

use cms_core::entities::{Course, Enrollment, Review};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::enrollments_by_course;
use crate::courses::average_rating;
use crate::settings::ReportSettings;

/// A course annotated with its mean rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatedCourse {
    #[serde(flatten)]
    pub course: Course,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewOverview {
    pub courses: Vec<RatedCourse>,
    pub course_average_rating: BTreeMap<i64, f64>,
    pub enrollment_count_by_course: BTreeMap<i64, usize>,
    pub reviews: Vec<Review>,
    pub total_reviews: usize,
    pub high_count: usize,
    pub low_count: usize,
    /// `None` when there are no reviews.
    pub high_percent: Option<u32>,
    /// `None` when there are no reviews.
    pub low_percent: Option<u32>,
}

/// Build the review overview.
///
/// Ratings at or above `settings.high_rating_threshold` are high, the rest
/// low, so `high_count + low_count == total_reviews`.
#[must_use]
pub fn review_overview(
    courses: &[Course],
    reviews: &[Review],
    enrollments: &[Enrollment],
    settings: &ReportSettings,
) -> ReviewOverview {
    let rated: Vec<RatedCourse> = courses
        .iter()
        .map(|course| RatedCourse {
            average_rating: average_rating(course.id, reviews),
            course: course.clone(),
        })
        .collect();
    let course_average_rating = rated.iter().map(|r| (r.course.id, r.average_rating)).collect();

    let total_reviews = reviews.len();
    let high_count = reviews
        .iter()
        .filter(|r| r.rating >= settings.high_rating_threshold)
        .count();
    let low_count = total_reviews - high_count;

    tracing::debug!(total_reviews, high_count, low_count, "computed review overview");

    ReviewOverview {
        courses: rated,
        course_average_rating,
        enrollment_count_by_course: enrollments_by_course(courses, enrollments),
        reviews: reviews.to_vec(),
        total_reviews,
        high_count,
        low_count,
        high_percent: percent(high_count, total_reviews),
        low_percent: percent(low_count, total_reviews),
    }
}

/// `part / total` as a whole percentage, rounding halves up.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percent(part: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some((100.0 * part as f64 / total as f64).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{course, enrollment, review};
    use cms_core::enums::Category;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(7, 10, Some(70))]
    #[case(3, 10, Some(30))]
    #[case(1, 3, Some(33))]
    #[case(2, 3, Some(67))]
    #[case(1, 8, Some(13))]
    #[case(0, 4, Some(0))]
    #[case(4, 4, Some(100))]
    #[case(0, 0, None)]
    fn percent_rounds_half_up(#[case] part: usize, #[case] total: usize, #[case] expected: Option<u32>) {
        assert_eq!(percent(part, total), expected);
    }

    #[test]
    fn seventy_thirty_split() {
        let courses = vec![course(1, Category::Programming)];
        let ratings = [5, 4, 4, 5, 4, 5, 4, 1, 2, 3];
        let reviews: Vec<Review> = ratings
            .iter()
            .zip(1..)
            .map(|(&rating, id)| review(id, 1, rating))
            .collect();

        let overview = review_overview(&courses, &reviews, &[], &ReportSettings::default());

        assert_eq!(overview.total_reviews, 10);
        assert_eq!(overview.high_count, 7);
        assert_eq!(overview.low_count, 3);
        assert_eq!(overview.high_percent, Some(70));
        assert_eq!(overview.low_percent, Some(30));
    }

    #[test]
    fn no_reviews_means_not_applicable() {
        let courses = vec![course(1, Category::Programming)];
        let overview = review_overview(&courses, &[], &[], &ReportSettings::default());

        assert_eq!(overview.total_reviews, 0);
        assert_eq!(overview.high_count, 0);
        assert_eq!(overview.low_count, 0);
        assert_eq!(overview.high_percent, None);
        assert_eq!(overview.low_percent, None);
        assert!(overview.course_average_rating[&1].abs() < f64::EPSILON);
    }

    #[test]
    fn annotates_every_course() {
        let courses = vec![course(1, Category::Programming), course(2, Category::DataScience)];
        let reviews = vec![review(1, 1, 5), review(2, 1, 3), review(3, 1, 4)];
        let enrollments = vec![enrollment(1, 10, 2, "active")];

        let overview = review_overview(&courses, &reviews, &enrollments, &ReportSettings::default());

        assert_eq!(overview.courses.len(), 2);
        assert!((overview.course_average_rating[&1] - 4.0).abs() < f64::EPSILON);
        assert!(overview.courses[1].average_rating.abs() < f64::EPSILON);
        assert_eq!(overview.enrollment_count_by_course, BTreeMap::from([(1, 0), (2, 1)]));
    }

    #[test]
    fn threshold_comes_from_settings() {
        let reviews = vec![review(1, 1, 3), review(2, 1, 4), review(3, 1, 5)];
        let settings = ReportSettings {
            high_rating_threshold: 5,
            ..ReportSettings::default()
        };

        let overview = review_overview(&[], &reviews, &[], &settings);
        assert_eq!((overview.high_count, overview.low_count), (1, 2));
    }

    #[test]
    fn rated_course_flattens_into_course_fields() {
        let rated = RatedCourse {
            course: course(1, Category::Programming),
            average_rating: 4.5,
        };
        let json = serde_json::to_value(&rated).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "Programming");
        assert_eq!(json["average_rating"], 4.5);
    }
}
