use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{ActivitySource, SourceError};
use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::week::FetchRange;

/// Activity source backed by the trip web backend.
///
/// Requests are issued once; failures are reported to the caller and never
/// retried.
pub struct HttpActivitySource {
    client: Client,
    base_url: String,
}

impl HttpActivitySource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build activity HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` URL for a weekly data request.
    pub fn weekly_url(&self, range: &FetchRange, filter: &CategoryFilterSet) -> String {
        format!(
            "{}/weekly_view_data?start_date={}&end_date={}&categories={}",
            self.base_url,
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d"),
            filter.query_value()
        )
    }

    pub fn activity_url(&self, id: i64) -> String {
        format!("{}/activities/{}", self.base_url, id)
    }

    fn get_text(&self, url: &str) -> Result<(StatusCode, String), SourceError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        Ok((status, body))
    }
}

impl ActivitySource for HttpActivitySource {
    fn fetch_week(
        &self,
        range: &FetchRange,
        filter: &CategoryFilterSet,
    ) -> Result<WeekData, SourceError> {
        let url = self.weekly_url(range, filter);
        log::debug!("Fetching weekly data: {}", url);

        let (status, body) = self.get_text(&url)?;
        if status != StatusCode::OK {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_activity(&self, id: i64) -> Result<Activity, SourceError> {
        let url = self.activity_url(id);
        log::debug!("Fetching activity details: {}", url);

        let (status, body) = self.get_text(&url)?;
        match status {
            StatusCode::OK => Ok(serde_json::from_str(&body)?),
            StatusCode::NOT_FOUND => Err(SourceError::NotFound(id)),
            other => Err(SourceError::Status(other.as_u16())),
        }
    }
}
