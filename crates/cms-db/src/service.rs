//! Service layer over the entity store.
//!
//! `CmsService` wraps `CmsDb` and the report tunables. Repository methods are
//! implemented as `impl CmsService` blocks under `repos/`, the lesson
//! mutations with duration rollup under `rollup`.

use cms_config::CmsConfig;
use cms_report::ReportSettings;

use crate::CmsDb;
use crate::error::DatabaseError;

pub struct CmsService {
    db: CmsDb,
    settings: ReportSettings,
}

impl CmsService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path`: path to the libSQL database file, or `":memory:"` for tests.
    /// * `settings`: limits and thresholds used by the report methods.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, settings: ReportSettings) -> Result<Self, DatabaseError> {
        let db = CmsDb::open_local(db_path).await?;
        Ok(Self { db, settings })
    }

    /// Open the database named by `config.database.path` with report settings
    /// taken from the `[dashboard]` and `[reviews]` sections.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &CmsConfig) -> Result<Self, DatabaseError> {
        Self::new_local(&config.database.path, report_settings(config)).await
    }

    #[must_use]
    pub const fn from_db(db: CmsDb, settings: ReportSettings) -> Self {
        Self { db, settings }
    }

    #[must_use]
    pub const fn db(&self) -> &CmsDb {
        &self.db
    }

    #[must_use]
    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }
}

/// Map configuration onto report settings.
#[must_use]
pub fn report_settings(config: &CmsConfig) -> ReportSettings {
    ReportSettings {
        recent_courses: config.dashboard.recent_courses as usize,
        top_students: config.dashboard.top_students as usize,
        high_rating_threshold: config.reviews.high_rating_threshold,
    }
}
