use std::path::Path;

use anyhow::Context;
use cms_config::CmsConfig;
use cms_db::service::CmsService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CmsService,
    pub config: CmsConfig,
}

impl AppContext {
    /// Open the configured database, creating its parent directory if needed.
    pub async fn init(config: CmsConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(&config.database.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let service = CmsService::from_config(&config)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { service, config })
    }
}
