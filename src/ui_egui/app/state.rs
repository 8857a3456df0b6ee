//! View state of the weekly calendar.
//!
//! Everything a render depends on lives here and is passed down explicitly;
//! navigation and filter changes are plain methods so they can be tested
//! without a UI.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::activity::WeekData;
use crate::models::category::default_trip_categories;
use crate::models::filter::CategoryFilterSet;
use crate::models::settings::{LayoutMode, OverlapPolicy, Settings};
use crate::models::week::{DateRangeOverride, FetchRange, WeekWindow};
use crate::services::layout::CollapsedDays;
use crate::services::summary::WeekSummary;

/// Unsubmitted contents of the two sidebar forms.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDrafts {
    pub checked: BTreeSet<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct WeekViewState {
    pub window: WeekWindow,
    pub filter: CategoryFilterSet,
    pub date_override: Option<DateRangeOverride>,
    pub collapsed: CollapsedDays,
    pub selected_day: Option<NaiveDate>,
    pub layout_mode: LayoutMode,
    pub overlap_policy: OverlapPolicy,
    pub first_day_of_week: u8,
    /// Last successfully loaded data and the range it covers.
    pub data: WeekData,
    pub loaded_range: Option<FetchRange>,
    pub summary: WeekSummary,
    pub drafts: FilterDrafts,
}

impl WeekViewState {
    /// Initial state: the week containing `today`, every built-in category
    /// checked and applied, and the date form prefilled with `trip_range`.
    pub fn new(today: NaiveDate, settings: &Settings, trip_range: Option<DateRangeOverride>) -> Self {
        let categories: BTreeSet<String> =
            default_trip_categories().into_iter().map(|c| c.name).collect();
        let (start_date, end_date) = trip_range
            .map(|range| (range.start, range.end))
            .unwrap_or((today, today));

        Self {
            window: WeekWindow::containing(today, settings.first_day_of_week),
            filter: CategoryFilterSet::with_categories(
                categories.iter().cloned(),
                settings.empty_filter_policy,
            ),
            date_override: None,
            collapsed: CollapsedDays::new(),
            selected_day: None,
            layout_mode: settings.layout_mode,
            overlap_policy: settings.overlap_policy,
            first_day_of_week: settings.first_day_of_week,
            data: WeekData::new(),
            loaded_range: None,
            summary: WeekSummary::default(),
            drafts: FilterDrafts {
                checked: categories,
                start_date,
                end_date,
            },
        }
    }

    /// Range the next fetch should cover.
    pub fn fetch_range(&self) -> FetchRange {
        self.window.fetch_range(self.date_override.as_ref())
    }

    /// Days drawn by the grid: the loaded range, or the window before the
    /// first load completes.
    pub fn display_days(&self) -> Vec<NaiveDate> {
        match &self.loaded_range {
            Some(range) => range.days(),
            None => self.window.days(),
        }
    }

    pub fn previous_week(&mut self) {
        self.window = self.window.previous();
    }

    pub fn next_week(&mut self) {
        self.window = self.window.next();
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.window = WeekWindow::containing(date, self.first_day_of_week);
    }

    /// Submit the category form.
    pub fn apply_category_form(&mut self) {
        self.filter.set(self.drafts.checked.iter().cloned());
        self.refresh_summary();
    }

    /// Submit the date form. On success the window jumps to the start date.
    pub fn apply_date_filter(&mut self) -> Result<DateRangeOverride, String> {
        let range = DateRangeOverride::new(self.drafts.start_date, self.drafts.end_date)?;
        self.date_override = Some(range);
        self.window = WeekWindow::starting(range.start);
        Ok(range)
    }

    pub fn clear_date_filter(&mut self) {
        self.date_override = None;
    }

    /// Store freshly loaded data and recompute the summaries.
    pub fn accept_data(&mut self, range: FetchRange, data: WeekData) {
        self.data = data;
        self.loaded_range = Some(range);
        self.refresh_summary();
    }

    pub fn refresh_summary(&mut self) {
        self.summary = WeekSummary::compute(&self.data, &self.filter);
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout_mode = mode;
    }

    /// Take over saved preferences. Returns true when the week window moved
    /// and the data has to be fetched again.
    pub fn apply_settings(&mut self, settings: &Settings) -> bool {
        self.filter.set_empty_policy(settings.empty_filter_policy);
        self.overlap_policy = settings.overlap_policy;
        self.layout_mode = settings.layout_mode;
        self.refresh_summary();

        if self.first_day_of_week == settings.first_day_of_week {
            return false;
        }
        self.first_day_of_week = settings.first_day_of_week;

        // An override window starts on its own start date.
        if self.date_override.is_some() {
            return false;
        }
        let window = WeekWindow::containing(self.window.start(), self.first_day_of_week);
        let moved = window != self.window;
        self.window = window;
        moved
    }
}
