//! Week window model.
//!
//! A [`WeekWindow`] is the 7-day unit the calendar navigates by. A
//! [`DateRangeOverride`] chosen in the date filter form replaces the window's
//! boundaries for fetching only; the header label keeps showing the window.

use chrono::{Datelike, Duration, NaiveDate};

use crate::utils::date::format_long_date;

pub const DAYS_PER_WEEK: i64 = 7;

/// Contiguous span `[start, start + 6 days]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// Window beginning exactly on `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Window containing `date`, aligned to `first_day_of_week`
    /// (0 = Sunday, 1 = Monday, ...).
    pub fn containing(date: NaiveDate, first_day_of_week: u8) -> Self {
        let weekday = date.weekday().num_days_from_sunday() as i64;
        let offset = (weekday - first_day_of_week as i64 + DAYS_PER_WEEK) % DAYS_PER_WEEK;
        Self::starting(date - Duration::days(offset))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_PER_WEEK - 1)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        (0..DAYS_PER_WEEK)
            .map(|offset| self.start + Duration::days(offset))
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start + Duration::days(DAYS_PER_WEEK))
    }

    pub fn previous(&self) -> Self {
        Self::starting(self.start - Duration::days(DAYS_PER_WEEK))
    }

    /// Header text, e.g. `October 28, 2024 - November 3, 2024`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            format_long_date(self.start),
            format_long_date(self.end())
        )
    }

    /// Fetch boundaries for this window, honouring an explicit override.
    pub fn fetch_range(&self, date_override: Option<&DateRangeOverride>) -> FetchRange {
        match date_override {
            Some(range) => FetchRange {
                start: range.start,
                end: range.end,
            },
            None => FetchRange {
                start: self.start,
                end: self.end(),
            },
        }
    }
}

/// Explicit `[start, end]` range chosen in the date filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeOverride {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeOverride {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "Start date {} must not be after end date {}",
                start, end
            ));
        }
        Ok(Self { start, end })
    }

    /// `October 28, 2024 to November 13, 2024`
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            format_long_date(self.start),
            format_long_date(self.end)
        )
    }
}

/// Inclusive date range a weekly data request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchRange {
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
