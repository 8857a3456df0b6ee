//! Weekly calendar layout.
//!
//! Turns a day-keyed activity map plus the category filter into positioned
//! blocks. Two layouts exist: an hourly grid that slices activities into one
//! fragment per hour row, and full-day columns that stack overlapping
//! activities vertically. All positions are percentages of the containing
//! row or column; nothing here clamps, so malformed times yield out-of-range
//! geometry rather than errors.
//!
//! Layout never mutates its input and never performs I/O.

use std::collections::BTreeSet;

use chrono::NaiveDate;

mod day_column;
mod hourly;

pub use day_column::{layout_day_columns, DayColumn, StackedBlock};
pub use hourly::{layout_hourly, BlockFragment, HourCell, HourRow, HourlyGrid, HOURS_PER_DAY};

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// User interaction collected while drawing the grid.
///
/// Views push actions instead of handling clicks inline; the app applies
/// them once per frame after the grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    OpenDetail(i64),
    ToggleCollapse(NaiveDate),
    /// Click on a day header outside its collapse toggle.
    SelectDay(NaiveDate),
}

/// Action for one frame of clicks on a day header.
///
/// The collapse toggle sits inside the header; a click on it only toggles
/// and never also selects the day.
pub fn header_action(date: NaiveDate, header_clicked: bool, toggle_clicked: bool) -> Option<GridAction> {
    if toggle_clicked {
        Some(GridAction::ToggleCollapse(date))
    } else if header_clicked {
        Some(GridAction::SelectDay(date))
    } else {
        None
    }
}

/// Days whose cells are drawn collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedDays {
    days: BTreeSet<NaiveDate>,
}

impl CollapsedDays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the day is collapsed afterwards.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.days.remove(&date) {
            false
        } else {
            self.days.insert(date);
            true
        }
    }

    pub fn is_collapsed(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

/// Apply collapse toggles to `collapsed` and hand back every other action,
/// in order, for the caller to dispatch.
pub fn apply_collapse_actions(actions: &[GridAction], collapsed: &mut CollapsedDays) -> Vec<GridAction> {
    let mut remaining = Vec::new();
    for action in actions {
        match action {
            GridAction::ToggleCollapse(date) => {
                collapsed.toggle(*date);
            }
            other => remaining.push(*other),
        }
    }
    remaining
}
