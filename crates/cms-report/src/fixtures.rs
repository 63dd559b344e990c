//! Entity builders for report unit tests.

use chrono::{TimeZone, Utc};
use cms_core::entities::{Course, Enrollment, Lesson, Review, User};
use cms_core::enums::{Category, CourseStatus, SkillLevel, UserRole};

pub fn course(id: i64, category: Category) -> Course {
    Course {
        id,
        name: format!("Course {id}"),
        description: None,
        category,
        skill_level: SkillLevel::Beginner,
        status: CourseStatus::Published,
        duration: 60,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        image: None,
    }
}

pub fn student(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        role: UserRole::Student,
    }
}

pub fn enrollment(id: i64, user_id: i64, course_id: i64, status: &str) -> Enrollment {
    Enrollment {
        id,
        user_id,
        course_id,
        status: status.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
    }
}

pub fn review(id: i64, course_id: i64, rating: i64) -> Review {
    Review {
        id,
        course_id,
        rating,
        body: format!("review {id}"),
        created_at: Utc.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap(),
    }
}

pub fn lesson(id: i64, course_id: i64, duration: u32) -> Lesson {
    Lesson {
        id,
        course_id,
        title: format!("Lesson {id}"),
        description: None,
        video_url: None,
        duration,
    }
}
