//! Review repository.

use chrono::Utc;

use cms_core::entities::{Review, validate_rating};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::CmsService;

const SELECT_COLS: &str = "id, course_id, rating, body, created_at";

fn row_to_review(row: &libsql::Row) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: row.get(0)?,
        course_id: row.get(1)?,
        rating: row.get(2)?,
        body: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CmsService {
    /// # Errors
    ///
    /// Returns `Validation` for a rating outside 1..=5 and `NotFound` for an
    /// unknown course.
    pub async fn create_review(
        &self,
        course_id: i64,
        rating: i64,
        body: &str,
    ) -> Result<Review, DatabaseError> {
        let rating = validate_rating(rating)?;
        self.get_course(course_id).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO reviews (course_id, rating, body, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![course_id, rating, body, now.to_rfc3339()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::info!(review_id = id, course_id, rating, "created review");
        Ok(Review {
            id,
            course_id,
            rating,
            body: body.to_string(),
            created_at: now,
        })
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM reviews ORDER BY id"), ())
            .await?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    pub async fn list_reviews_by_course(&self, course_id: i64) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reviews WHERE course_id = ?1 ORDER BY id"),
                [course_id],
            )
            .await?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }
}
