use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status value that counts an enrollment as finished.
pub const COMPLETED_STATUS: &str = "completed";

/// A user's enrollment in a course.
///
/// `status` is kept as recorded; only completion is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Case-insensitive match against `"completed"`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case(COMPLETED_STATUS)
    }
}
