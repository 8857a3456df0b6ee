use std::sync::Arc;

use crate::services::config::{AppConfig, DataSourceKind};
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::source::ActivitySource;

/// Shared access point for services and resources that multiple app modules need.
pub struct AppContext {
    database: &'static Database,
    source: Arc<dyn ActivitySource>,
    config: AppConfig,
}

impl AppContext {
    pub fn new(database: &'static Database, source: Arc<dyn ActivitySource>, config: AppConfig) -> Self {
        Self {
            database,
            source,
            config,
        }
    }

    pub fn database(&self) -> &'static Database {
        self.database
    }

    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(self.database)
    }

    pub fn source(&self) -> Arc<dyn ActivitySource> {
        Arc::clone(&self.source)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether activities live in the local database rather than on a server.
    pub fn is_local(&self) -> bool {
        self.config.data_source == DataSourceKind::Local
    }
}
