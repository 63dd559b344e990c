use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// A course review with a 1–5 star rating.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub course_id: i64,
    pub rating: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// # Errors
///
/// Returns `CoreError::Validation` when `rating` is outside `1..=5`.
pub fn validate_rating(rating: i64) -> Result<i64, CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}
