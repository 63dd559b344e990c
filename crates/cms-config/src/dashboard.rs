//! Report sizing: dashboard truncation limits and the review split threshold.

use serde::{Deserialize, Serialize};

const fn default_recent_courses() -> u32 {
    6
}

const fn default_top_students() -> u32 {
    8
}

const fn default_high_rating_threshold() -> i64 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// How many of the newest courses the dashboard lists.
    #[serde(default = "default_recent_courses")]
    pub recent_courses: u32,

    /// Length of the top-students ranking.
    #[serde(default = "default_top_students")]
    pub top_students: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_courses: default_recent_courses(),
            top_students: default_top_students(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewsConfig {
    /// Ratings at or above this value count as high, below as low.
    #[serde(default = "default_high_rating_threshold")]
    pub high_rating_threshold: i64,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            high_rating_threshold: default_high_rating_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let dashboard = DashboardConfig::default();
        assert_eq!(dashboard.recent_courses, 6);
        assert_eq!(dashboard.top_students, 8);
        assert_eq!(ReviewsConfig::default().high_rating_threshold, 4);
    }
}
