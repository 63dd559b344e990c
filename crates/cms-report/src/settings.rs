/// Tunables shared by the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// Length of the dashboard's newest-courses list.
    pub recent_courses: usize,
    /// Length of the dashboard's top-students ranking.
    pub top_students: usize,
    /// Ratings `>=` this are high, below it low.
    pub high_rating_threshold: i64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            recent_courses: 6,
            top_students: 8,
            high_rating_threshold: 4,
        }
    }
}
