use crate::models::settings::Settings;
use rusqlite::types::Type;
use rusqlite::Row;
use std::str::FromStr;

pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    Ok(Settings {
        id: Some(row.get(0)?),
        theme: row.get(1)?,
        first_day_of_week: row.get(2)?,
        time_format: parse_column(row, 3)?,
        layout_mode: parse_column(row, 4)?,
        overlap_policy: parse_column(row, 5)?,
        empty_filter_policy: parse_column(row, 6)?,
        use_system_theme: row.get::<_, i32>(7)? != 0,
    })
}

fn parse_column<T>(row: &Row, index: usize) -> Result<T, rusqlite::Error>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, err.into())
    })
}
