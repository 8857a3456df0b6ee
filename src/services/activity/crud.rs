use super::shared::{format_date, format_time, map_activity_row, ACTIVITY_COLUMNS};
use super::ActivityService;
use crate::models::activity::{Activity, NewActivity};
use anyhow::{anyhow, Context, Result};
use rusqlite::{self, params, Connection};

impl<'a> ActivityService<'a> {
    /// Insert a new activity and return it with its assigned id.
    pub fn create(&self, activity: NewActivity) -> Result<Activity> {
        insert_activity(self.conn, &activity)?;
        let id = self.conn.last_insert_rowid();
        log::debug!("Created activity {} '{}'", id, activity.title);
        Ok(activity.into_activity(id))
    }

    /// Retrieve an activity by id.
    pub fn get(&self, id: i64) -> Result<Option<Activity>> {
        let result = self.conn.query_row(
            &format!("SELECT {} FROM activities WHERE id = ?", ACTIVITY_COLUMNS),
            [id],
            map_activity_row,
        );

        match result {
            Ok(activity) => Ok(Some(activity)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update every field of an existing activity.
    pub fn update(&self, activity: &Activity) -> Result<()> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE activities SET
                    date = ?, start_time = ?, end_time = ?, title = ?, location = ?,
                    description = ?, category = ?, price = ?, latitude = ?, longitude = ?
                 WHERE id = ?",
                params![
                    format_date(activity.date),
                    format_time(activity.start_time),
                    format_time(activity.end_time),
                    activity.title,
                    activity.location,
                    activity.description,
                    activity.category,
                    activity.price,
                    activity.latitude,
                    activity.longitude,
                    activity.id,
                ],
            )
            .context("Failed to update activity")?;

        if rows_affected == 0 {
            return Err(anyhow!("Activity with id {} not found", activity.id));
        }

        Ok(())
    }

    /// Delete an activity by id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM activities WHERE id = ?", [id])
            .context("Failed to delete activity")?;

        if rows_affected == 0 {
            return Err(anyhow!("Activity with id {} not found", id));
        }

        Ok(())
    }

    /// Number of stored activities.
    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))
            .context("Failed to count activities")
    }
}

pub(super) fn insert_activity(conn: &Connection, activity: &NewActivity) -> Result<()> {
    activity.validate().map_err(|e| anyhow!(e))?;

    conn.execute(
        "INSERT INTO activities (
            date, start_time, end_time, title, location, description,
            category, price, latitude, longitude
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            format_date(activity.date),
            format_time(activity.start_time),
            format_time(activity.end_time),
            activity.title,
            activity.location,
            activity.description,
            activity.category,
            activity.price,
            activity.latitude,
            activity.longitude,
        ],
    )
    .context("Failed to insert activity")?;

    Ok(())
}
