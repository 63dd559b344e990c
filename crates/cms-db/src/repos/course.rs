//! Course repository: CRUD, category lookup and status toggle.

use chrono::Utc;

use cms_core::entities::{Course, NewCourse};
use cms_core::enums::Category;

use crate::error::DatabaseError;
use crate::helpers::{get_minutes, get_opt_string, opt_value, parse_datetime, parse_enum};
use crate::repos::lesson::count_lessons_on;
use crate::service::CmsService;
use crate::updates::course::CourseUpdate;

pub(crate) const SELECT_COLS: &str =
    "id, name, description, category, skill_level, status, duration, created_at, image";

pub(crate) fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        description: get_opt_string(row, 2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        skill_level: parse_enum(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        duration: get_minutes(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        image: get_opt_string(row, 8)?,
    })
}

/// Look up a course on `conn`, which may be an open transaction.
pub(crate) async fn find_course_on(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Course>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM courses WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_course(&row)?)),
        None => Ok(None),
    }
}

impl CmsService {
    /// Validate and insert a course.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` when any field is rejected.
    pub async fn create_course(&self, input: NewCourse) -> Result<Course, DatabaseError> {
        let valid = input.validate()?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO courses (name, description, category, skill_level, status, duration, created_at, image)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    valid.name.as_str(),
                    opt_value(valid.description.as_deref()),
                    valid.category.as_str(),
                    valid.skill_level.as_str(),
                    valid.status.as_str(),
                    i64::from(valid.duration),
                    now.to_rfc3339(),
                    opt_value(valid.image.as_deref())
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::info!(course_id = id, category = %valid.category, "created course");

        Ok(Course {
            id,
            name: valid.name,
            description: valid.description,
            category: valid.category,
            skill_level: valid.skill_level,
            status: valid.status,
            duration: valid.duration,
            created_at: now,
            image: valid.image,
        })
    }

    pub async fn find_course(&self, id: i64) -> Result<Option<Course>, DatabaseError> {
        find_course_on(self.db().conn(), id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no course has `id`.
    pub async fn get_course(&self, id: i64) -> Result<Course, DatabaseError> {
        self.find_course(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("course", id))
    }

    /// All courses in id order.
    pub async fn list_courses(&self) -> Result<Vec<Course>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM courses ORDER BY id"), ())
            .await?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    pub async fn list_courses_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Course>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM courses WHERE category = ?1 ORDER BY id"),
                [category.as_str()],
            )
            .await?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    /// Apply an update through the validating setters.
    ///
    /// A manual duration is only accepted while the course has no lessons;
    /// afterwards the duration is owned by the lesson rollup. The lesson count
    /// and the write run in one write transaction, serialized against lesson
    /// mutations.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown course and `Validation` for a
    /// rejected field.
    pub async fn update_course(
        &self,
        course_id: i64,
        update: CourseUpdate,
    ) -> Result<Course, DatabaseError> {
        let tx = self.db().write_transaction().await?;
        let mut course = find_course_on(&tx, course_id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("course", course_id))?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            if name.trim().is_empty() {
                return Err(DatabaseError::Validation("Course name must not be empty".into()));
            }
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(opt_value(description.as_deref()));
            idx += 1;
        }
        if let Some(ref category) = update.category {
            course.set_category(category)?;
            sets.push(format!("category = ?{idx}"));
            params.push(course.category.as_str().into());
            idx += 1;
        }
        if let Some(ref skill_level) = update.skill_level {
            course.set_skill_level(skill_level)?;
            sets.push(format!("skill_level = ?{idx}"));
            params.push(course.skill_level.as_str().into());
            idx += 1;
        }
        if let Some(ref status) = update.status {
            course.set_status(status)?;
            sets.push(format!("status = ?{idx}"));
            params.push(course.status.as_str().into());
            idx += 1;
        }
        if let Some(duration) = update.duration {
            course.set_duration(duration)?;
            if count_lessons_on(&tx, course_id).await? > 0 {
                return Err(DatabaseError::Validation(
                    "Duration is derived from lessons once the course has any".into(),
                ));
            }
            sets.push(format!("duration = ?{idx}"));
            params.push(i64::from(course.duration).into());
            idx += 1;
        }
        if let Some(ref image) = update.image {
            sets.push(format!("image = ?{idx}"));
            params.push(opt_value(image.as_deref()));
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(course);
        }

        params.push(course_id.into());
        let sql = format!("UPDATE courses SET {} WHERE id = ?{idx}", sets.join(", "));
        tx.execute(&sql, libsql::params_from_iter(params)).await?;

        let updated = find_course_on(&tx, course_id)
            .await?
            .ok_or(DatabaseError::NoResult)?;
        tx.commit().await?;

        tracing::info!(course_id, "updated course");
        Ok(updated)
    }

    /// Flip `draft` and `published`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown course.
    pub async fn toggle_course_status(&self, course_id: i64) -> Result<Course, DatabaseError> {
        let mut course = self.get_course(course_id).await?;
        course.status = course.status.toggled();

        self.db()
            .conn()
            .execute(
                "UPDATE courses SET status = ?1 WHERE id = ?2",
                libsql::params![course.status.as_str(), course_id],
            )
            .await?;

        tracing::info!(course_id, status = %course.status, "toggled course status");
        Ok(course)
    }

    /// Delete a course with its lessons, enrollments and reviews.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown course.
    pub async fn delete_course(&self, course_id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM courses WHERE id = ?1", [course_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("course", course_id));
        }
        tracing::info!(course_id, "deleted course");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_course, new_lesson, test_service};
    use crate::updates::course::CourseUpdateBuilder;
    use cms_core::enums::{CourseStatus, SkillLevel};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_and_get() {
        let svc = test_service().await;
        let created = svc.create_course(new_course("Rust 101", "Programming")).await.unwrap();

        let fetched = svc.get_course(created.id).await.unwrap();
        assert_eq!(fetched.name, "Rust 101");
        assert_eq!(fetched.category, Category::Programming);
        assert_eq!(fetched.status, CourseStatus::Draft);
        assert_eq!(fetched.duration, 90);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let svc = test_service().await;

        let bad_category = svc.create_course(new_course("X", "web-development")).await;
        assert!(matches!(bad_category, Err(DatabaseError::Validation(_))));

        let mut zero = new_course("X", "Programming");
        zero.duration = 0;
        assert!(matches!(svc.create_course(zero).await, Err(DatabaseError::Validation(_))));

        assert!(svc.list_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_increase() {
        let svc = test_service().await;
        let a = svc.create_course(new_course("A", "Programming")).await.unwrap();
        let b = svc.create_course(new_course("B", "Programming")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn find_missing_is_none_and_get_is_not_found() {
        let svc = test_service().await;
        assert!(svc.find_course(42).await.unwrap().is_none());
        assert!(svc.get_course(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_by_category() {
        let svc = test_service().await;
        svc.create_course(new_course("A", "Data Science")).await.unwrap();
        svc.create_course(new_course("B", "Programming")).await.unwrap();
        svc.create_course(new_course("C", "Data Science")).await.unwrap();

        let data = svc.list_courses_by_category(Category::DataScience).await.unwrap();
        let names: Vec<&str> = data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn update_applies_validated_fields() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();

        let update = CourseUpdateBuilder::new()
            .name("Advanced A")
            .category("Artificial Intelligence")
            .skill_level("advanced")
            .duration(120)
            .description(Some("deep".into()))
            .build();
        let updated = svc.update_course(course.id, update).await.unwrap();

        assert_eq!(updated.name, "Advanced A");
        assert_eq!(updated.category, Category::ArtificialIntelligence);
        assert_eq!(updated.skill_level, SkillLevel::Advanced);
        assert_eq!(updated.duration, 120);
        assert_eq!(updated.description.as_deref(), Some("deep"));
    }

    #[tokio::test]
    async fn update_rejects_invalid_values_without_writing() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();

        let update = CourseUpdateBuilder::new().name("B").skill_level("expert").build();
        let result = svc.update_course(course.id, update).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));

        assert_eq!(svc.get_course(course.id).await.unwrap().name, "A");
    }

    #[tokio::test]
    async fn manual_duration_accepted_until_first_lesson() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();

        let before = CourseUpdateBuilder::new().duration(45).build();
        assert_eq!(svc.update_course(course.id, before).await.unwrap().duration, 45);

        svc.create_lesson(new_lesson(course.id, "Intro", 30)).await.unwrap();

        let after = CourseUpdateBuilder::new().name("Renamed").duration(500).build();
        let err = svc.update_course(course.id, after).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let stored = svc.get_course(course.id).await.unwrap();
        assert_eq!(stored.duration, 30);
        assert_eq!(stored.name, "A");
    }

    #[tokio::test]
    async fn rejected_update_leaves_connection_writable() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();
        svc.create_lesson(new_lesson(course.id, "Intro", 30)).await.unwrap();

        let locked = CourseUpdateBuilder::new().duration(500).build();
        assert!(svc.update_course(course.id, locked).await.is_err());

        svc.create_lesson(new_lesson(course.id, "Next", 15)).await.unwrap();
        let renamed = CourseUpdateBuilder::new().name("B").build();
        let updated = svc.update_course(course.id, renamed).await.unwrap();
        assert_eq!(updated.name, "B");
        assert_eq!(updated.duration, 45);
    }

    #[tokio::test]
    async fn update_missing_course_is_not_found() {
        let svc = test_service().await;
        let update = CourseUpdateBuilder::new().name("B").build();
        assert!(svc.update_course(99, update).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn empty_update_returns_current() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();
        let same = svc.update_course(course.id, CourseUpdate::default()).await.unwrap();
        assert_eq!(same, course);
    }

    #[tokio::test]
    async fn toggle_status_flips_both_ways() {
        let svc = test_service().await;
        let course = svc.create_course(new_course("A", "Programming")).await.unwrap();

        let published = svc.toggle_course_status(course.id).await.unwrap();
        assert_eq!(published.status, CourseStatus::Published);
        let draft = svc.toggle_course_status(course.id).await.unwrap();
        assert_eq!(draft.status, CourseStatus::Draft);
        assert_eq!(svc.get_course(course.id).await.unwrap().status, CourseStatus::Draft);
    }

    #[tokio::test]
    async fn delete_missing_course_is_not_found() {
        let svc = test_service().await;
        assert!(svc.delete_course(7).await.unwrap_err().is_not_found());
    }
}
