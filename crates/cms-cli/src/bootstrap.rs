use anyhow::Context;
use cms_config::CmsConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CmsConfig> {
    let mut config = CmsConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut CmsConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden by --db");
        config.database.path.clone_from(db);
    }
}
