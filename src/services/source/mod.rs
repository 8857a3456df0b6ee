//! Where weekly activity data comes from.
//!
//! The calendar talks to an [`ActivitySource`]; the HTTP implementation calls
//! the trip backend, the local one answers from the SQLite store.

use thiserror::Error;

use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::week::FetchRange;

mod http;
mod local;

pub use http::HttpActivitySource;
pub use local::LocalActivitySource;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Server responded with HTTP status {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Activity {0} not found")]
    NotFound(i64),

    #[error("Activity store error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

impl From<anyhow::Error> for SourceError {
    fn from(err: anyhow::Error) -> Self {
        SourceError::Store(format!("{:#}", err))
    }
}

/// Provider of weekly activity data and single-activity details.
#[cfg_attr(test, mockall::automock)]
pub trait ActivitySource: Send + Sync {
    /// Day-keyed activities for `range`, restricted server-side to the
    /// filter's selected categories when any are selected.
    fn fetch_week(
        &self,
        range: &FetchRange,
        filter: &CategoryFilterSet,
    ) -> Result<WeekData, SourceError>;

    fn fetch_activity(&self, id: i64) -> Result<Activity, SourceError>;
}
