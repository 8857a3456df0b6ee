use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_settings_table(conn)?;
    run_settings_migrations(conn)?;
    insert_default_settings(conn)?;
    create_activities_table(conn)?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            theme TEXT NOT NULL DEFAULT 'light',
            first_day_of_week INTEGER NOT NULL DEFAULT 1,
            time_format TEXT NOT NULL DEFAULT '12h',
            layout_mode TEXT NOT NULL DEFAULT 'hourly',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create settings table")?;

    Ok(())
}

fn run_settings_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "settings",
        "overlap_policy",
        "ALTER TABLE settings ADD COLUMN overlap_policy TEXT NOT NULL DEFAULT 'last_seen'",
    )?;

    migrations::ensure_column(
        conn,
        "settings",
        "empty_filter_policy",
        "ALTER TABLE settings ADD COLUMN empty_filter_policy TEXT NOT NULL DEFAULT 'show_none'",
    )?;

    migrations::ensure_column(
        conn,
        "settings",
        "use_system_theme",
        "ALTER TABLE settings ADD COLUMN use_system_theme INTEGER NOT NULL DEFAULT 0",
    )?;

    Ok(())
}

fn insert_default_settings(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, theme, first_day_of_week, time_format, layout_mode)
         VALUES (1, 'light', 1, '12h', 'hourly')",
        [],
    )
    .context("Failed to insert default settings")?;

    Ok(())
}

fn create_activities_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS activities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            title TEXT NOT NULL,
            location TEXT NOT NULL,
            description TEXT,
            category TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0.0,
            latitude REAL,
            longitude REAL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create activities table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_activities_date ON activities(date, start_time)",
        [],
    )
    .context("Failed to create activities date index")?;

    Ok(())
}
