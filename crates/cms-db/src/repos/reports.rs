//! Report queries: load the needed collections, then delegate to `cms-report`.
//!
//! Nothing is cached; every call reads the store again.

use std::collections::BTreeMap;

use cms_report::{
    CategoryBreakdown, CategoryDetail, CourseDetail, DashboardSummary, ReviewOverview,
    StudentsOverview,
};

use crate::error::DatabaseError;
use crate::service::CmsService;

impl CmsService {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, DatabaseError> {
        let courses = self.list_courses().await?;
        let students = self.list_students().await?;
        let enrollments = self.list_enrollments().await?;
        Ok(cms_report::dashboard_summary(
            &courses,
            &students,
            &enrollments,
            self.settings(),
        ))
    }

    /// Enrollment count for every course, zero included.
    pub async fn course_enrollment_counts(&self) -> Result<BTreeMap<i64, usize>, DatabaseError> {
        let courses = self.list_courses().await?;
        let enrollments = self.list_enrollments().await?;
        Ok(cms_report::course_enrollment_counts(&courses, &enrollments))
    }

    pub async fn category_breakdown(&self) -> Result<CategoryBreakdown, DatabaseError> {
        let courses = self.list_courses().await?;
        Ok(cms_report::category_breakdown(&courses))
    }

    /// Courses of the category named by `slug`. Values that are not slugs
    /// are matched against display names; unknown ones yield an empty detail,
    /// not an error.
    pub async fn category_detail(&self, slug: &str) -> Result<CategoryDetail, DatabaseError> {
        let courses = self.list_courses().await?;
        let enrollments = self.list_enrollments().await?;
        Ok(cms_report::category_detail(slug, &courses, &enrollments))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when the course does not exist.
    pub async fn course_detail(&self, course_id: i64) -> Result<CourseDetail, DatabaseError> {
        let course = self.find_course(course_id).await?;
        let reviews = self.list_reviews_by_course(course_id).await?;
        let enrollments = self.list_enrollments_by_course(course_id).await?;
        let lessons = self.list_lessons_by_course(course_id).await?;
        cms_report::course_detail(
            course_id,
            course.as_slice(),
            &reviews,
            &enrollments,
            &lessons,
        )
        .map_err(DatabaseError::from)
    }

    /// Mean rating of `course_id`, `0.0` with no reviews.
    pub async fn average_rating(&self, course_id: i64) -> Result<f64, DatabaseError> {
        let reviews = self.list_reviews_by_course(course_id).await?;
        Ok(cms_report::average_rating(course_id, &reviews))
    }

    pub async fn students_overview(&self) -> Result<StudentsOverview, DatabaseError> {
        let students = self.list_students().await?;
        let enrollments = self.list_enrollments().await?;
        Ok(cms_report::students_overview(&students, &enrollments))
    }

    pub async fn review_overview(&self) -> Result<ReviewOverview, DatabaseError> {
        let courses = self.list_courses().await?;
        let reviews = self.list_reviews().await?;
        let enrollments = self.list_enrollments().await?;
        Ok(cms_report::review_overview(
            &courses,
            &reviews,
            &enrollments,
            self.settings(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_course, new_lesson, test_service};
    use cms_core::enums::UserRole;

    #[tokio::test]
    async fn empty_store_reports() {
        let svc = test_service().await;

        let summary = svc.dashboard_summary().await.unwrap();
        assert_eq!(summary.total_courses, 0);
        assert!(summary.top_students.is_empty());

        let reviews = svc.review_overview().await.unwrap();
        assert_eq!(reviews.high_percent, None);
        assert_eq!(reviews.low_percent, None);

        assert_eq!(svc.category_breakdown().await.unwrap().entries.len(), 5);
        assert!(svc.course_enrollment_counts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn course_detail_found_and_missing() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("Rust", "Programming")).await.unwrap();
        let ada = svc.create_user("ada", UserRole::Student).await.unwrap();
        svc.create_enrollment(ada.id, course.id, "enrolled").await.unwrap();
        svc.create_lesson(new_lesson(course.id, "Intro", 15)).await.unwrap();
        svc.create_review(course.id, 5, "great").await.unwrap();
        svc.create_review(course.id, 4, "good").await.unwrap();

        let detail = svc.course_detail(course.id).await.unwrap();
        assert_eq!(detail.course.duration, 15);
        assert_eq!(detail.enrollment_count, 1);
        assert_eq!(detail.lesson_count, 1);
        assert_eq!(detail.reviews.len(), 2);
        assert!((detail.average_rating - 4.5).abs() < f64::EPSILON);

        assert!(svc.course_detail(course.id + 1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn average_rating_without_reviews() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("Rust", "Programming")).await.unwrap();
        assert!(svc.average_rating(course.id).await.unwrap().abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn students_overview_lists_only_students() {
        let svc = test_service().await;
        svc.create_user("ada", UserRole::Student).await.unwrap();
        svc.create_user("prof", UserRole::Instructor).await.unwrap();

        let overview = svc.students_overview().await.unwrap();
        assert_eq!(overview.total_students, 1);
        assert_eq!(overview.students[0].username, "ada");
    }
}
