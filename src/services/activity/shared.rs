use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{self, Result, Row};

use crate::models::activity::Activity;

pub(crate) const ACTIVITY_COLUMNS: &str = "id, date, start_time, end_time, title, location,
     description, category, price, latitude, longitude";

pub(crate) fn map_activity_row(row: &Row<'_>) -> Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        date: parse_date(1, row.get::<_, String>(1)?)?,
        start_time: parse_time(2, row.get::<_, String>(2)?)?,
        end_time: parse_time(3, row.get::<_, String>(3)?)?,
        title: row.get(4)?,
        location: row.get(5)?,
        description: row.get(6)?,
        category: row.get(7)?,
        price: row.get(8)?,
        latitude: row.get(9)?,
        longitude: row.get(10)?,
    })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

fn parse_date(index: usize, value: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn parse_time(index: usize, value: String) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(&value, "%H:%M:%S")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
