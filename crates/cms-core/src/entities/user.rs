use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// A platform account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

impl User {
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}
