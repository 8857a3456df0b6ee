use super::shared::{format_date, map_activity_row, ACTIVITY_COLUMNS};
use super::ActivityService;
use crate::models::activity::{Activity, WeekData};
use crate::models::week::FetchRange;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::types::Value;

impl<'a> ActivityService<'a> {
    /// All activities ordered by date and start time.
    pub fn list_all(&self) -> Result<Vec<Activity>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM activities ORDER BY date, start_time",
            ACTIVITY_COLUMNS
        ))?;

        let activities = stmt
            .query_map([], map_activity_row)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to list activities")?;

        Ok(activities)
    }

    /// Activities with `start <= date <= end`, restricted to `categories`
    /// when the list is non-empty.
    pub fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        categories: &[String],
    ) -> Result<Vec<Activity>> {
        let start = format_date(start);
        let end = format_date(end);

        let activities = if categories.is_empty() {
            let mut stmt = self.conn.prepare(&format!(
                "SELECT {} FROM activities
                 WHERE date >= ?1 AND date <= ?2
                 ORDER BY date, start_time",
                ACTIVITY_COLUMNS
            ))?;
            let rows = stmt.query_map([&start, &end], map_activity_row)?;
            rows.collect::<Result<Vec<_>, _>>()
        } else {
            let placeholders = vec!["?"; categories.len()].join(", ");
            let mut stmt = self.conn.prepare(&format!(
                "SELECT {} FROM activities
                 WHERE date >= ? AND date <= ? AND category IN ({})
                 ORDER BY date, start_time",
                ACTIVITY_COLUMNS, placeholders
            ))?;
            let mut params: Vec<Value> = vec![Value::Text(start), Value::Text(end)];
            params.extend(categories.iter().cloned().map(Value::Text));
            let rows = stmt.query_map(rusqlite::params_from_iter(params), map_activity_row)?;
            rows.collect::<Result<Vec<_>, _>>()
        }
        .context("Failed to query activities in range")?;

        Ok(activities)
    }

    /// Day-keyed activities for a fetch range. Every day of the range gets a
    /// key, including days without activities.
    pub fn weekly_view_data(&self, range: &FetchRange, categories: &[String]) -> Result<WeekData> {
        let mut week: WeekData = range.days().into_iter().map(|d| (d, Vec::new())).collect();

        for activity in self.find_in_range(range.start, range.end, categories)? {
            week.entry(activity.date).or_default().push(activity);
        }

        Ok(week)
    }
}
