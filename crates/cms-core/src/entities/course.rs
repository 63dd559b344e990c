use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, CourseStatus, SkillLevel};
use crate::errors::CoreError;

/// A course offered on the platform.
///
/// `duration` is in minutes. Once the course has lessons it is derived from
/// them and written through [`Course::set_derived_duration`]; user input goes
/// through the validated [`Course::set_duration`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub skill_level: SkillLevel,
    pub status: CourseStatus,
    pub duration: u32,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl Course {
    /// Set the category from its display name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `raw` is not one of the five names.
    pub fn set_category(&mut self, raw: &str) -> Result<(), CoreError> {
        self.category = parse_category(raw)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for anything other than
    /// `beginner`, `intermediate`, `advanced`.
    pub fn set_skill_level(&mut self, raw: &str) -> Result<(), CoreError> {
        self.skill_level = SkillLevel::parse(raw)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for anything other than `draft`, `published`.
    pub fn set_status(&mut self, raw: &str) -> Result<(), CoreError> {
        self.status = CourseStatus::parse(raw)?;
        Ok(())
    }

    /// Set a user-supplied duration in minutes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` unless `minutes > 0`.
    pub fn set_duration(&mut self, minutes: i64) -> Result<(), CoreError> {
        self.duration = validate_duration(minutes)?;
        Ok(())
    }

    /// Write the lesson-derived duration. Zero is legal here: a course whose
    /// last lesson was removed has no content time.
    pub const fn set_derived_duration(&mut self, minutes: u32) {
        self.duration = minutes;
    }

    /// Duration as `"{hours}h {minutes}m"`.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        format!("{}h {}m", self.duration / 60, self.duration % 60)
    }

    /// Creation date as `"dd Mon yyyy"`, e.g. `"09 Feb 2026"`.
    #[must_use]
    pub fn formatted_created_at(&self) -> String {
        self.created_at.format("%d %b %Y").to_string()
    }
}

/// Input for creating a course. Enumerated fields arrive as raw strings and
/// are checked by [`NewCourse::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub skill_level: String,
    pub status: Option<String>,
    pub duration: i64,
    pub image: Option<String>,
}

/// A `NewCourse` whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCourse {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub skill_level: SkillLevel,
    pub status: CourseStatus,
    pub duration: u32,
    pub image: Option<String>,
}

impl NewCourse {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on an empty name, an unknown category,
    /// skill level or status, or a non-positive duration.
    pub fn validate(self) -> Result<ValidCourse, CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Course name must not be empty".into()));
        }
        let status = match self.status.as_deref() {
            Some(raw) => CourseStatus::parse(raw)?,
            None => CourseStatus::default(),
        };
        Ok(ValidCourse {
            category: parse_category(&self.category)?,
            skill_level: SkillLevel::parse(&self.skill_level)?,
            status,
            duration: validate_duration(self.duration)?,
            name: self.name,
            description: self.description,
            image: self.image,
        })
    }
}

fn parse_category(raw: &str) -> Result<Category, CoreError> {
    Category::from_name(raw)
        .ok_or_else(|| CoreError::Validation(format!("Invalid category: {raw}")))
}

fn validate_duration(minutes: i64) -> Result<u32, CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(
            "Duration must be greater than 0".into(),
        ));
    }
    u32::try_from(minutes)
        .map_err(|_| CoreError::Validation(format!("Duration out of range: {minutes}")))
}
