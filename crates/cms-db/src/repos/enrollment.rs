//! Enrollment repository.

use chrono::Utc;

use cms_core::entities::Enrollment;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::CmsService;

const SELECT_COLS: &str = "id, user_id, course_id, status, created_at";

fn row_to_enrollment(row: &libsql::Row) -> Result<Enrollment, DatabaseError> {
    Ok(Enrollment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        course_id: row.get(2)?,
        status: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CmsService {
    /// Enroll `user_id` in `course_id` with a free-text `status`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when either the user or the course does not exist.
    pub async fn create_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
        status: &str,
    ) -> Result<Enrollment, DatabaseError> {
        self.get_user(user_id).await?;
        self.get_course(course_id).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO enrollments (user_id, course_id, status, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![user_id, course_id, status, now.to_rfc3339()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::info!(enrollment_id = id, user_id, course_id, "created enrollment");
        Ok(Enrollment {
            id,
            user_id,
            course_id,
            status: status.to_string(),
            created_at: now,
        })
    }

    pub async fn list_enrollments(&self) -> Result<Vec<Enrollment>, DatabaseError> {
        self.query_enrollments(
            &format!("SELECT {SELECT_COLS} FROM enrollments ORDER BY id"),
            libsql::params![],
        )
        .await
    }

    pub async fn list_enrollments_by_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Enrollment>, DatabaseError> {
        self.query_enrollments(
            &format!("SELECT {SELECT_COLS} FROM enrollments WHERE course_id = ?1 ORDER BY id"),
            libsql::params![course_id],
        )
        .await
    }

    pub async fn list_enrollments_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Enrollment>, DatabaseError> {
        self.query_enrollments(
            &format!("SELECT {SELECT_COLS} FROM enrollments WHERE user_id = ?1 ORDER BY id"),
            libsql::params![user_id],
        )
        .await
    }

    async fn query_enrollments(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Enrollment>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut enrollments = Vec::new();
        while let Some(row) = rows.next().await? {
            enrollments.push(row_to_enrollment(&row)?);
        }
        Ok(enrollments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_course, test_service};
    use cms_core::enums::UserRole;

    #[tokio::test]
    async fn create_and_filter() {
        let svc = test_service().await;
        let ada = svc.create_user("ada", UserRole::Student).await.unwrap();
        let bob = svc.create_user("bob", UserRole::Student).await.unwrap();
        let rust = svc.create_course(new_course("Rust", "Programming")).await.unwrap();
        let ml = svc.create_course(new_course("ML", "Data Science")).await.unwrap();

        svc.create_enrollment(ada.id, rust.id, "enrolled").await.unwrap();
        svc.create_enrollment(ada.id, ml.id, "Completed").await.unwrap();
        svc.create_enrollment(bob.id, rust.id, "enrolled").await.unwrap();

        assert_eq!(svc.list_enrollments().await.unwrap().len(), 3);
        assert_eq!(svc.list_enrollments_by_user(ada.id).await.unwrap().len(), 2);
        assert_eq!(svc.list_enrollments_by_course(rust.id).await.unwrap().len(), 2);

        let completed: Vec<_> = svc
            .list_enrollments_by_user(ada.id)
            .await
            .unwrap()
            .into_iter()
            .filter(Enrollment::is_completed)
            .collect();
        assert_eq!(completed.len(), 1);
    }

    #[tokio::test]
    async fn unknown_references_are_not_found() {
        let svc = test_service().await;
        let ada = svc.create_user("ada", UserRole::Student).await.unwrap();

        let err = svc.create_enrollment(ada.id, 99, "enrolled").await.unwrap_err();
        assert!(err.is_not_found());
        let err = svc.create_enrollment(99, 1, "enrolled").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
