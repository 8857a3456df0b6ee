// Activity module
// Trip activity model matching the weekly view JSON shape

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day-keyed activity map, the payload of a weekly view fetch.
///
/// Keys serialize as `YYYY-MM-DD` strings so the map round-trips through the
/// `{ "2024-10-29": [ ... ] }` JSON object served by the backend.
pub type WeekData = BTreeMap<NaiveDate, Vec<Activity>>;

/// A single scheduled trip activity.
///
/// Values are treated as immutable by the layout code. Nothing here enforces
/// `start_time < end_time`; reversed ranges flow through the layout arithmetic
/// and produce negative geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub price: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Activity {
    /// Minutes since midnight at which the activity starts.
    pub fn start_minutes(&self) -> i64 {
        minutes_of_day(self.start_time)
    }

    /// Minutes since midnight at which the activity ends.
    pub fn end_minutes(&self) -> i64 {
        minutes_of_day(self.end_time)
    }

    /// Signed duration in minutes. Zero or negative for malformed ranges.
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes() - self.start_minutes()
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn end_hour(&self) -> u32 {
        self.end_time.hour()
    }

    /// Case-insensitive substring match on the location, used to highlight
    /// activities in the trip's destination.
    pub fn location_mentions(&self, keyword: &str) -> bool {
        !keyword.is_empty() && self.location.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// JSON object including the derived minute fields the weekly endpoint emits.
    pub fn to_weekly_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let Some(map) = value.as_object_mut() {
            map.insert("start_minutes".into(), self.start_minutes().into());
            map.insert("end_minutes".into(), self.end_minutes().into());
            map.insert("duration_minutes".into(), self.duration_minutes().into());
        }
        value
    }
}

fn minutes_of_day(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}

/// Insertable activity without a database id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewActivity {
    /// Create a new activity with the required fields and no optional data.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            title: title.into(),
            location: String::new(),
            description: None,
            category: category.into(),
            price: 0.0,
            latitude: None,
            longitude: None,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Validate fields the activity table declares `NOT NULL`.
    ///
    /// Time ordering is deliberately left alone; the weekly view accepts
    /// whatever the store holds.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Activity title cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Activity category cannot be empty".to_string());
        }
        if self.title.len() > 100 {
            return Err("Activity title must be 100 characters or less".to_string());
        }
        if !self.price.is_finite() {
            return Err("Activity price must be a number".to_string());
        }
        Ok(())
    }

    /// Attach an id, producing the stored representation.
    pub fn into_activity(self, id: i64) -> Activity {
        Activity {
            id,
            title: self.title,
            location: self.location,
            category: self.category,
            start_time: self.start_time,
            end_time: self.end_time,
            price: self.price,
            date: self.date,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
