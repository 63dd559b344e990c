//! User repository: accounts and the student subset.

use cms_core::entities::User;
use cms_core::enums::UserRole;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::service::CmsService;

const SELECT_COLS: &str = "id, username, role";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        role: parse_enum(&row.get::<String>(2)?)?,
    })
}

impl CmsService {
    /// # Errors
    ///
    /// Returns `Validation` for a blank username. A duplicate username
    /// surfaces as the store's uniqueness error.
    pub async fn create_user(&self, username: &str, role: UserRole) -> Result<User, DatabaseError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DatabaseError::Validation("Username must not be empty".into()));
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO users (username, role) VALUES (?1, ?2)",
                libsql::params![username, role.as_str()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::info!(user_id = id, role = %role, "created user");
        Ok(User {
            id,
            username: username.to_string(),
            role,
        })
    }

    pub async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no user has `id`.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        self.find_user(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("user", id))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        self.query_users(&format!("SELECT {SELECT_COLS} FROM users ORDER BY id"), ())
            .await
    }

    /// Users with `role = student`, in id order.
    pub async fn list_students(&self) -> Result<Vec<User>, DatabaseError> {
        self.query_users(
            &format!("SELECT {SELECT_COLS} FROM users WHERE role = ?1 ORDER BY id"),
            [UserRole::Student.as_str()],
        )
        .await
    }

    /// Delete a student and, by cascade, their enrollments.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when `id` is not a student, including when it names
    /// an instructor or admin.
    pub async fn delete_student(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM users WHERE id = ?1 AND role = ?2",
                libsql::params![id, UserRole::Student.as_str()],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("student", id));
        }
        tracing::info!(user_id = id, "deleted student");
        Ok(())
    }

    async fn query_users(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}
