//! Shared test utilities for cms-db unit tests.

pub(crate) mod helpers {
    use cms_core::entities::{NewCourse, NewLesson};
    use cms_report::ReportSettings;

    use crate::CmsDb;
    use crate::service::CmsService;

    /// In-memory service with default report settings.
    pub async fn test_service() -> CmsService {
        let db = CmsDb::open_local(":memory:").await.unwrap();
        CmsService::from_db(db, ReportSettings::default())
    }

    /// A valid 90-minute beginner course.
    pub fn new_course(name: &str, category: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            skill_level: "beginner".to_string(),
            status: None,
            duration: 90,
            image: None,
        }
    }

    pub fn new_lesson(course_id: i64, title: &str, duration: u32) -> NewLesson {
        NewLesson {
            course_id,
            title: title.to_string(),
            description: None,
            video_url: None,
            duration,
        }
    }
}
