//! Lesson read paths. Mutations go through [`crate::rollup`].

use cms_core::entities::Lesson;

use crate::error::DatabaseError;
use crate::helpers::{get_minutes, get_opt_string};
use crate::service::CmsService;

pub(crate) const SELECT_COLS: &str = "id, course_id, title, description, video_url, duration";

pub(crate) fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    Ok(Lesson {
        id: row.get(0)?,
        course_id: row.get(1)?,
        title: row.get(2)?,
        description: get_opt_string(row, 3)?,
        video_url: get_opt_string(row, 4)?,
        duration: get_minutes(row, 5)?,
    })
}

async fn collect_lessons(mut rows: libsql::Rows) -> Result<Vec<Lesson>, DatabaseError> {
    let mut lessons = Vec::new();
    while let Some(row) = rows.next().await? {
        lessons.push(row_to_lesson(&row)?);
    }
    Ok(lessons)
}

pub(crate) async fn find_lesson_on(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Lesson>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM lessons WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_lesson(&row)?)),
        None => Ok(None),
    }
}

pub(crate) async fn lessons_of_on(
    conn: &libsql::Connection,
    course_id: i64,
) -> Result<Vec<Lesson>, DatabaseError> {
    let rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM lessons WHERE course_id = ?1 ORDER BY id"),
            [course_id],
        )
        .await?;
    collect_lessons(rows).await
}

pub(crate) async fn count_lessons_on(
    conn: &libsql::Connection,
    course_id: i64,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query("SELECT COUNT(*) FROM lessons WHERE course_id = ?1", [course_id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

impl CmsService {
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM lessons ORDER BY id"), ())
            .await?;
        collect_lessons(rows).await
    }

    pub async fn list_lessons_by_course(&self, course_id: i64) -> Result<Vec<Lesson>, DatabaseError> {
        lessons_of_on(self.db().conn(), course_id).await
    }

    pub async fn find_lesson(&self, id: i64) -> Result<Option<Lesson>, DatabaseError> {
        find_lesson_on(self.db().conn(), id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no lesson has `id`.
    pub async fn get_lesson(&self, id: i64) -> Result<Lesson, DatabaseError> {
        self.find_lesson(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("lesson", id))
    }

    pub async fn count_lessons(&self, course_id: i64) -> Result<i64, DatabaseError> {
        count_lessons_on(self.db().conn(), course_id).await
    }
}
