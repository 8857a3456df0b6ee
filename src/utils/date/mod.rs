// Date utility functions
// Display formats used by the week header, activity blocks and detail view

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::models::settings::TimeFormat;

/// `October 28, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Tue 10/29` style header for a day column.
pub fn format_day_header(date: NaiveDate) -> String {
    date.format("%a %m/%d").to_string()
}

/// `9:30 AM` in 12-hour mode, `09:30` in 24-hour mode.
pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
        TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
    }
}

pub fn format_time_range(start: NaiveTime, end: NaiveTime, format: TimeFormat) -> String {
    format!("{} - {}", format_time(start, format), format_time(end, format))
}

/// `$12.50`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Row label for an hour of the grid, e.g. `09:00`.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Parse a `YYYY-MM-DD` date as used by query strings and config files.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}
