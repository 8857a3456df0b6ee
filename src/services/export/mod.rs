//! Printable export of the current weekly view.
//!
//! Produces a standalone HTML page that asks the browser to print itself as
//! soon as it loads. The document lives in `templates/weekly_print.html`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use askama::Template;
use chrono::NaiveDate;

use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::settings::{LayoutMode, OverlapPolicy, TimeFormat};
use crate::models::week::WeekWindow;
use crate::services::layout::{layout_day_columns, layout_hourly};
use crate::services::summary::WeekSummary;
use crate::utils::date::{format_day_header, format_price, format_time_range, hour_label};

pub const EXPORT_TITLE: &str = "Weekly View - Printable";

#[derive(Template)]
#[template(path = "weekly_print.html")]
struct PrintableWeek<'a> {
    title: &'a str,
    label: String,
    headers: Vec<String>,
    hourly: bool,
    rows: Vec<PrintRow>,
    columns: Vec<Vec<PrintItem>>,
    total: String,
    badges: Vec<String>,
}

struct PrintRow {
    label: String,
    cells: Vec<Vec<PrintItem>>,
}

struct PrintItem {
    title: String,
    time: String,
    location: String,
    category: String,
    price: String,
    continued: bool,
}

impl PrintItem {
    fn new(activity: &Activity, continued: bool) -> Self {
        Self {
            title: activity.title.clone(),
            time: format_time_range(activity.start_time, activity.end_time, TimeFormat::TwelveHour),
            location: activity.location.clone(),
            category: activity.category.clone(),
            price: format_price(activity.price),
            continued,
        }
    }
}

/// A rendered printable page.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintableExport {
    html: String,
}

impl PrintableExport {
    /// Render the visible activities of `data` in the given layout.
    pub fn render_html(
        window: &WeekWindow,
        data: &WeekData,
        filter: &CategoryFilterSet,
        summary: &WeekSummary,
        mode: LayoutMode,
    ) -> Result<Self> {
        let days: Vec<NaiveDate> = if data.is_empty() {
            window.days()
        } else {
            data.keys().copied().collect()
        };

        let (rows, columns) = match mode {
            LayoutMode::Hourly => (hourly_rows(&days, data, filter), Vec::new()),
            LayoutMode::DayColumn => (Vec::new(), day_columns(&days, data, filter)),
        };

        let page = PrintableWeek {
            title: EXPORT_TITLE,
            label: window.label(),
            headers: days.iter().map(|day| format_day_header(*day)).collect(),
            hourly: mode == LayoutMode::Hourly,
            rows,
            columns,
            total: summary.format_total_cost(),
            badges: summary.category_badges(),
        };

        let html = page
            .render()
            .context("Failed to render printable view template")?;

        Ok(Self { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.html)
            .with_context(|| format!("Failed to write printable view to {}", path.display()))?;
        log::info!("Wrote printable view to {:?}", path);
        Ok(())
    }
}

fn hourly_rows(days: &[NaiveDate], data: &WeekData, filter: &CategoryFilterSet) -> Vec<PrintRow> {
    layout_hourly(days, data, filter)
        .rows
        .iter()
        .map(|row| PrintRow {
            label: hour_label(row.hour),
            cells: row
                .cells
                .iter()
                .map(|cell| {
                    cell.fragments
                        .iter()
                        .map(|fragment| {
                            let continued = fragment.activity.start_hour() != row.hour;
                            PrintItem::new(&fragment.activity, continued)
                        })
                        .collect()
                })
                .collect(),
        })
        .collect()
}

fn day_columns(days: &[NaiveDate], data: &WeekData, filter: &CategoryFilterSet) -> Vec<Vec<PrintItem>> {
    // Only block order is printed, so the overlap policy is irrelevant.
    layout_day_columns(days, data, filter, OverlapPolicy::LastSeen)
        .iter()
        .map(|column| {
            column
                .blocks
                .iter()
                .map(|block| PrintItem::new(&block.activity, false))
                .collect()
        })
        .collect()
}
