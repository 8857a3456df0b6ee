// Property-based tests for the weekly grid layouts
// Random activities must always land in the rows and slots the layout rules promise

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use trip_calendar::models::activity::{NewActivity, WeekData};
use trip_calendar::models::filter::CategoryFilterSet;
use trip_calendar::models::settings::{EmptyFilterPolicy, OverlapPolicy};
use trip_calendar::models::week::WeekWindow;
use trip_calendar::services::layout::{layout_day_columns, layout_hourly, CollapsedDays, HOURS_PER_DAY};
use trip_calendar::services::summary::WeekSummary;

fn trip_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 29).unwrap()
}

fn show_all() -> CategoryFilterSet {
    CategoryFilterSet::new(EmptyFilterPolicy::ShowAll)
}

fn week_with(start: (u32, u32), end: (u32, u32)) -> WeekData {
    let activity = NewActivity::new(
        "Walking tour",
        "Sightseeing",
        trip_day(),
        NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    )
    .into_activity(1);

    let mut data = WeekData::new();
    data.insert(trip_day(), vec![activity]);
    data
}

proptest! {
    /// Property: an activity occupies exactly the rows start_hour..end_hour
    #[test]
    fn prop_hourly_rows_match_hour_span(
        start_hour in 0..23u32,
        start_minute in 0..60u32,
        span in 1..6u32,
        end_minute in 0..60u32,
    ) {
        let end_hour = (start_hour + span).min(23);
        prop_assume!(end_hour > start_hour);

        let data = week_with((start_hour, start_minute), (end_hour, end_minute));
        let grid = layout_hourly(&[trip_day()], &data, &show_all());

        prop_assert_eq!(grid.rows.len(), HOURS_PER_DAY as usize);
        for hour in 0..HOURS_PER_DAY {
            let count = grid.cell(hour, trip_day()).unwrap().fragments.len();
            let expected = usize::from(hour >= start_hour && hour < end_hour);
            prop_assert_eq!(count, expected, "hour {}", hour);
        }
    }

    /// Property: the first fragment starts at the activity's minute offset and
    /// only the first fragment is offset
    #[test]
    fn prop_hourly_first_fragment_offset(
        start_hour in 0..20u32,
        start_minute in 0..60u32,
        span in 1..4u32,
    ) {
        let end_hour = start_hour + span;
        let data = week_with((start_hour, start_minute), (end_hour, 0));
        let grid = layout_hourly(&[trip_day()], &data, &show_all());

        let first = &grid.cell(start_hour, trip_day()).unwrap().fragments[0];
        prop_assert!((first.top_pct - start_minute as f64 / 60.0 * 100.0).abs() < 1e-9);
        prop_assert!(first.top_pct >= 0.0 && first.top_pct < 100.0);

        for hour in (start_hour + 1)..end_hour {
            let fragment = &grid.cell(hour, trip_day()).unwrap().fragments[0];
            prop_assert_eq!(fragment.top_pct, 0.0);
        }
    }

    /// Property: every fragment stays inside its hour row, and an activity
    /// contained in one hour gets exactly one fragment
    #[test]
    fn prop_hourly_fragments_fit_their_row(
        start_hour in 0..23u32,
        start_minute in 0..60u32,
        duration in 1..360u32,
    ) {
        let start = start_hour * 60 + start_minute;
        let end = (start + duration).min(23 * 60 + 59);
        prop_assume!(end > start);

        let data = week_with((start_hour, start_minute), (end / 60, end % 60));
        let grid = layout_hourly(&[trip_day()], &data, &show_all());

        for row in &grid.rows {
            for fragment in &row.cells[0].fragments {
                prop_assert!(fragment.top_pct >= 0.0, "hour {}", row.hour);
                prop_assert!(fragment.height_pct > 0.0, "hour {}", row.hour);
                prop_assert!(
                    fragment.top_pct + fragment.height_pct <= 100.0 + 1e-9,
                    "hour {} overflows: {}",
                    row.hour,
                    fragment.top_pct + fragment.height_pct
                );
            }
        }

        if end / 60 == start_hour || end == (start_hour + 1) * 60 {
            prop_assert_eq!(grid.fragment_count(), 1);
            let fragment = &grid.cell(start_hour, trip_day()).unwrap().fragments[0];
            let expected = (end - start) as f64 / 60.0 * 100.0;
            prop_assert!((fragment.height_pct - expected).abs() < 1e-9);
        }
    }

    /// Property: a non-overlapping sequence of blocks never records overlap
    #[test]
    fn prop_day_column_sequential_blocks_do_not_overlap(
        starts in proptest::collection::btree_set(0..23u32, 1..8),
        policy in prop_oneof![Just(OverlapPolicy::LastSeen), Just(OverlapPolicy::MonotonicMax)],
    ) {
        let activities = starts
            .iter()
            .enumerate()
            .map(|(i, hour)| {
                NewActivity::new(
                    format!("Block {}", i),
                    "Food",
                    trip_day(),
                    NaiveTime::from_hms_opt(*hour, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(*hour, 45, 0).unwrap(),
                )
                .into_activity(i as i64)
            })
            .collect();
        let mut data = WeekData::new();
        data.insert(trip_day(), activities);

        let columns = layout_day_columns(&[trip_day()], &data, &show_all(), policy);
        prop_assert_eq!(columns[0].blocks.len(), starts.len());
        for block in &columns[0].blocks {
            prop_assert!(!block.overlaps_previous());
            prop_assert_eq!(block.visible_top_pct(), block.top_pct);
        }
    }

    /// Property: navigating forward then back returns to the same window
    #[test]
    fn prop_week_navigation_round_trip(offset in -2000i64..2000, first_day in 0..7u8) {
        let date = trip_day() + chrono::Duration::days(offset);
        let window = WeekWindow::containing(date, first_day);

        prop_assert!(window.contains(date));
        prop_assert_eq!(window.next().previous(), window);
        prop_assert_eq!(window.previous().next(), window);
    }

    /// Property: total cost is the sum of prices over visible activities only
    #[test]
    fn prop_total_cost_sums_visible_prices(
        entries in proptest::collection::vec((0..1000u32, prop::bool::ANY), 0..20),
    ) {
        let activities = entries
            .iter()
            .enumerate()
            .map(|(i, (cents, is_food))| {
                NewActivity::new(
                    "Item",
                    if *is_food { "Food" } else { "Travel" },
                    trip_day(),
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                )
                .price(*cents as f64 / 100.0)
                .into_activity(i as i64)
            })
            .collect();
        let mut data = WeekData::new();
        data.insert(trip_day(), activities);

        let filter = CategoryFilterSet::with_categories(["Food"], EmptyFilterPolicy::ShowNone);
        let summary = WeekSummary::compute(&data, &filter);

        let expected: f64 = entries
            .iter()
            .filter(|(_, is_food)| *is_food)
            .map(|(cents, _)| *cents as f64 / 100.0)
            .sum();
        prop_assert!((summary.total_cost - expected).abs() < 1e-6);
        prop_assert_eq!(summary.visible_count, entries.iter().filter(|(_, f)| *f).count());
    }

    /// Property: toggling a day twice restores the collapse state
    #[test]
    fn prop_collapse_toggle_twice_restores(offsets in proptest::collection::vec(0..7i64, 0..7), target in 0..7i64) {
        let mut collapsed = CollapsedDays::new();
        for offset in &offsets {
            collapsed.toggle(trip_day() + chrono::Duration::days(*offset));
        }
        let before = collapsed.clone();
        let day = trip_day() + chrono::Duration::days(target);

        collapsed.toggle(day);
        collapsed.toggle(day);

        prop_assert_eq!(collapsed, before);
    }
}
