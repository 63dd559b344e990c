use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A lesson. Belongs to exactly one course for its whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    /// Minutes.
    pub duration: u32,
}

/// Input for creating a lesson under `course_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLesson {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration: u32,
}

impl NewLesson {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on an empty title.
    pub fn validate(self) -> Result<Self, CoreError> {
        validate_title(&self.title)?;
        Ok(self)
    }
}

/// # Errors
///
/// Returns `CoreError::Validation` when `title` is blank.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Lesson title must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let lesson = NewLesson {
            course_id: 1,
            title: "   ".into(),
            ..NewLesson::default()
        };
        assert!(matches!(lesson.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn zero_minute_lesson_is_allowed() {
        let lesson = NewLesson {
            course_id: 1,
            title: "Intro".into(),
            ..NewLesson::default()
        };
        assert_eq!(lesson.validate().unwrap().duration, 0);
    }
}
