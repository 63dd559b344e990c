//! Entity store location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".cms/cms.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_project_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".cms/cms.db");
        assert!(!config.is_in_memory());
    }
}
