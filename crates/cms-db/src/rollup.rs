//! Lesson mutations and the course duration rollup.
//!
//! Every lesson write runs in one transaction with the recomputation of its
//! course's `duration`, so readers never see a stale total and concurrent
//! writers cannot interleave the read-sum-write. After any of
//! [`CmsService::create_lesson`], [`CmsService::update_lesson`] or
//! [`CmsService::delete_lesson`] commits,
//! `course.duration == sum(lesson.duration)` holds for the affected course.

use cms_core::entities::{Course, Lesson, NewLesson, validate_title};
use cms_report::duration::total_lesson_minutes;

use crate::error::DatabaseError;
use crate::helpers::opt_value;
use crate::repos::course::find_course_on;
use crate::repos::lesson::{find_lesson_on, lessons_of_on};
use crate::service::CmsService;
use crate::updates::lesson::LessonUpdate;

async fn sum_on(conn: &libsql::Connection, course_id: i64) -> Result<u32, DatabaseError> {
    let lessons = lessons_of_on(conn, course_id).await?;
    Ok(total_lesson_minutes(&lessons))
}

/// Recompute and persist `course_id`'s duration on `conn`.
///
/// A missing course is skipped and yields `None`.
async fn rollup_on(
    conn: &libsql::Connection,
    course_id: i64,
) -> Result<Option<Course>, DatabaseError> {
    let Some(mut course) = find_course_on(conn, course_id).await? else {
        tracing::warn!(course_id, "course missing, duration rollup skipped");
        return Ok(None);
    };

    let total = sum_on(conn, course_id).await?;
    course.set_derived_duration(total);
    conn.execute(
        "UPDATE courses SET duration = ?1 WHERE id = ?2",
        libsql::params![i64::from(total), course_id],
    )
    .await?;

    tracing::info!(course_id, duration = total, "rolled up course duration");
    Ok(Some(course))
}

impl CmsService {
    /// Sum of the durations of `course_id`'s lessons; `0` with no lessons.
    pub async fn recompute_duration(&self, course_id: i64) -> Result<u32, DatabaseError> {
        sum_on(self.db().conn(), course_id).await
    }

    /// Recompute `course_id`'s duration and persist it.
    ///
    /// Returns the updated course, or `None` when the course does not exist.
    pub async fn apply_rollup(&self, course_id: i64) -> Result<Option<Course>, DatabaseError> {
        let tx = self.db().write_transaction().await?;
        let course = rollup_on(&tx, course_id).await?;
        tx.commit().await?;
        Ok(course)
    }

    /// Insert a lesson and roll its duration into the parent course.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank title and `NotFound` when the parent
    /// course does not exist.
    pub async fn create_lesson(&self, input: NewLesson) -> Result<Lesson, DatabaseError> {
        let input = input.validate()?;

        let tx = self.db().write_transaction().await?;
        if find_course_on(&tx, input.course_id).await?.is_none() {
            return Err(DatabaseError::not_found("course", input.course_id));
        }

        tx.execute(
            "INSERT INTO lessons (course_id, title, description, video_url, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                input.course_id,
                input.title.as_str(),
                opt_value(input.description.as_deref()),
                opt_value(input.video_url.as_deref()),
                i64::from(input.duration)
            ],
        )
        .await?;
        let id = tx.last_insert_rowid();

        rollup_on(&tx, input.course_id).await?;
        tx.commit().await?;

        tracing::info!(lesson_id = id, course_id = input.course_id, "created lesson");
        Ok(Lesson {
            id,
            course_id: input.course_id,
            title: input.title,
            description: input.description,
            video_url: input.video_url,
            duration: input.duration,
        })
    }

    /// Update a lesson and re-roll its course's duration.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown lesson and `Validation` for a blank
    /// title.
    pub async fn update_lesson(
        &self,
        lesson_id: i64,
        update: LessonUpdate,
    ) -> Result<Lesson, DatabaseError> {
        if let Some(ref title) = update.title {
            validate_title(title)?;
        }

        let tx = self.db().write_transaction().await?;
        let existing = find_lesson_on(&tx, lesson_id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("lesson", lesson_id))?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(opt_value(description.as_deref()));
            idx += 1;
        }
        if let Some(ref video_url) = update.video_url {
            sets.push(format!("video_url = ?{idx}"));
            params.push(opt_value(video_url.as_deref()));
            idx += 1;
        }
        if let Some(duration) = update.duration {
            sets.push(format!("duration = ?{idx}"));
            params.push(i64::from(duration).into());
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(existing);
        }

        params.push(lesson_id.into());
        let sql = format!("UPDATE lessons SET {} WHERE id = ?{idx}", sets.join(", "));
        tx.execute(&sql, libsql::params_from_iter(params)).await?;

        rollup_on(&tx, existing.course_id).await?;
        let updated = find_lesson_on(&tx, lesson_id)
            .await?
            .ok_or(DatabaseError::NoResult)?;
        tx.commit().await?;

        tracing::info!(lesson_id, course_id = existing.course_id, "updated lesson");
        Ok(updated)
    }

    /// Delete a lesson and re-roll its course's duration.
    ///
    /// Returns the deleted lesson.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown lesson.
    pub async fn delete_lesson(&self, lesson_id: i64) -> Result<Lesson, DatabaseError> {
        let tx = self.db().write_transaction().await?;
        let existing = find_lesson_on(&tx, lesson_id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("lesson", lesson_id))?;

        tx.execute("DELETE FROM lessons WHERE id = ?1", [lesson_id]).await?;
        rollup_on(&tx, existing.course_id).await?;
        tx.commit().await?;

        tracing::info!(lesson_id, course_id = existing.course_id, "deleted lesson");
        Ok(existing)
    }
}
