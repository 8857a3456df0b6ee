use chrono::{NaiveDate, Timelike};

use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;

pub const HOURS_PER_DAY: u32 = 24;

/// One slice of an activity inside a single hour row.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFragment {
    pub activity: Activity,
    /// Offset from the top of the row, in percent of the row height.
    pub top_pct: f64,
    /// Height in percent of the row height.
    pub height_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourCell {
    pub date: NaiveDate,
    pub fragments: Vec<BlockFragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub hour: u32,
    pub cells: Vec<HourCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyGrid {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<HourRow>,
}

impl HourlyGrid {
    pub fn cell(&self, hour: u32, date: NaiveDate) -> Option<&HourCell> {
        self.rows
            .get(hour as usize)?
            .cells
            .iter()
            .find(|cell| cell.date == date)
    }

    pub fn fragment_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| cell.fragments.len())
            .sum()
    }
}

/// Lay out `days` as 24 hour rows with one cell per day.
///
/// An activity appears in row `h` when `start_hour <= h < end_hour`, so it is
/// split into one fragment per hour it touches. An activity that starts and
/// ends inside the same hour keeps that single row. Fragments are clipped to
/// their row. Days absent from `data` get empty cells.
pub fn layout_hourly(
    days: &[NaiveDate],
    data: &WeekData,
    filter: &CategoryFilterSet,
) -> HourlyGrid {
    let rows = (0..HOURS_PER_DAY)
        .map(|hour| HourRow {
            hour,
            cells: days
                .iter()
                .map(|date| HourCell {
                    date: *date,
                    fragments: data
                        .get(date)
                        .map(|activities| fragments_for_hour(activities, hour, filter))
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    HourlyGrid {
        days: days.to_vec(),
        rows,
    }
}

fn fragments_for_hour(
    activities: &[Activity],
    hour: u32,
    filter: &CategoryFilterSet,
) -> Vec<BlockFragment> {
    activities
        .iter()
        .filter(|activity| activity.start_hour() <= hour && hour < last_row(activity))
        .filter(|activity| filter.is_visible(activity))
        .map(|activity| fragment(activity, hour))
        .collect()
}

/// Exclusive end of the rows an activity occupies.
fn last_row(activity: &Activity) -> u32 {
    if activity.end_hour() == activity.start_hour() && activity.end_time > activity.start_time {
        activity.start_hour() + 1
    } else {
        activity.end_hour()
    }
}

fn fragment(activity: &Activity, hour: u32) -> BlockFragment {
    let top_pct = if hour == activity.start_hour() {
        activity.start_time.minute() as f64 / 60.0 * 100.0
    } else {
        0.0
    };
    let hours_left_in_block = last_row(activity) as f64 - hour as f64;
    let height_pct = activity.duration_hours().min(hours_left_in_block) * 100.0;

    BlockFragment {
        activity: activity.clone(),
        top_pct,
        height_pct: height_pct.min(100.0 - top_pct),
    }
}
