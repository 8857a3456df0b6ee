use super::crud::insert_activity;
use super::ActivityService;
use crate::models::activity::NewActivity;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// One entry of a bulk import payload (`{"activities": [...]}`).
///
/// Dates are `MM/DD/YYYY` and times are `h:mm AM/PM`, the format the trip
/// planning spreadsheet exports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkActivityInput {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BulkPayload {
    activities: Vec<BulkActivityInput>,
}

impl BulkActivityInput {
    pub fn to_new_activity(&self) -> Result<NewActivity> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%m/%d/%Y")
            .with_context(|| format!("Invalid date '{}', expected MM/DD/YYYY", self.date))?;
        let start_time = parse_clock_time(&self.start_time)?;
        let end_time = parse_clock_time(&self.end_time)?;

        Ok(NewActivity {
            date,
            start_time,
            end_time,
            title: self.title.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%I:%M %p")
        .with_context(|| format!("Invalid time '{}', expected h:mm AM/PM", value))
}

/// Parse a `{"activities": [...]}` document.
pub fn parse_bulk_json(json: &str) -> Result<Vec<BulkActivityInput>> {
    let payload: BulkPayload =
        serde_json::from_str(json).context("Failed to parse bulk activity payload")?;
    Ok(payload.activities)
}

impl<'a> ActivityService<'a> {
    /// Insert every entry or none of them. Returns the number inserted.
    pub fn bulk_add(&self, inputs: &[BulkActivityInput]) -> Result<usize> {
        let activities = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                input
                    .to_new_activity()
                    .with_context(|| format!("Bulk entry {} ('{}')", index + 1, input.title))
            })
            .collect::<Result<Vec<_>>>()?;

        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to start bulk import transaction")?;

        for activity in &activities {
            insert_activity(&tx, activity)?;
        }

        tx.commit().context("Failed to commit bulk import")?;
        log::info!("Added {} activities to the database", activities.len());

        Ok(activities.len())
    }
}
