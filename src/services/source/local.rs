use std::sync::Mutex;

use super::{ActivitySource, SourceError};
use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::week::FetchRange;
use crate::services::activity::ActivityService;
use crate::services::database::Database;

/// Activity source answering from a SQLite store.
///
/// `rusqlite::Connection` is not `Sync`, so the database sits behind a mutex
/// and each request holds it for the duration of one query.
pub struct LocalActivitySource {
    db: Mutex<Database>,
}

impl LocalActivitySource {
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    fn with_service<T>(
        &self,
        f: impl FnOnce(&ActivityService<'_>) -> anyhow::Result<T>,
    ) -> Result<T, SourceError> {
        let db = self
            .db
            .lock()
            .map_err(|_| SourceError::Store("Activity store lock poisoned".into()))?;
        let service = ActivityService::new(db.connection());
        Ok(f(&service)?)
    }
}

impl ActivitySource for LocalActivitySource {
    fn fetch_week(
        &self,
        range: &FetchRange,
        filter: &CategoryFilterSet,
    ) -> Result<WeekData, SourceError> {
        let categories = filter.fetch_categories();
        self.with_service(|service| service.weekly_view_data(range, &categories))
    }

    fn fetch_activity(&self, id: i64) -> Result<Activity, SourceError> {
        self.with_service(|service| service.get(id))?
            .ok_or(SourceError::NotFound(id))
    }
}
