// Category filter visibility tests
// Every surface (layout, summary, export) goes through the same filter

use chrono::{NaiveDate, NaiveTime};
use test_case::test_case;
use trip_calendar::models::activity::NewActivity;
use trip_calendar::models::filter::CategoryFilterSet;
use trip_calendar::models::settings::EmptyFilterPolicy;
use trip_calendar::services::summary::WeekSummary;

fn activity(category: &str) -> trip_calendar::models::activity::Activity {
    NewActivity::new(
        "Test",
        category,
        NaiveDate::from_ymd_opt(2024, 10, 29).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    )
    .into_activity(1)
}

#[test_case(&["Food"], "Food", true ; "selected category")]
#[test_case(&["Food"], "Travel", false ; "unselected category")]
#[test_case(&["Food", "Travel"], "Travel", true ; "one of several")]
#[test_case(&["Food"], "food", false ; "match is case sensitive")]
#[test_case(&["Food"], "", false ; "empty category string")]
fn test_visibility_with_selection(selected: &[&str], category: &str, expected: bool) {
    let filter = CategoryFilterSet::with_categories(selected.iter().copied(), EmptyFilterPolicy::ShowNone);
    assert_eq!(filter.is_visible(&activity(category)), expected);
}

#[test_case(EmptyFilterPolicy::ShowNone, false ; "show none")]
#[test_case(EmptyFilterPolicy::ShowAll, true ; "show all")]
fn test_empty_selection_policy(policy: EmptyFilterPolicy, expected: bool) {
    let filter = CategoryFilterSet::new(policy);
    assert_eq!(filter.is_visible(&activity("Historical")), expected);
}

#[test_case(&[], 0 ; "nothing selected")]
#[test_case(&["Food"], 2 ; "one category")]
#[test_case(&["Food", "Travel", "Cultural"], 3 ; "all present categories")]
fn test_summary_counts_follow_filter(selected: &[&str], expected_count: usize) {
    let mut data = trip_calendar::models::activity::WeekData::new();
    let date = NaiveDate::from_ymd_opt(2024, 10, 29).unwrap();
    data.insert(date, vec![activity("Food"), activity("Food"), activity("Travel")]);

    let filter = CategoryFilterSet::with_categories(selected.iter().copied(), EmptyFilterPolicy::ShowNone);
    let summary = WeekSummary::compute(&data, &filter);
    assert_eq!(summary.visible_count, expected_count);
}

#[test]
fn test_toggle_round_trip_preserves_query() {
    let mut filter = CategoryFilterSet::with_categories(["Food", "Travel"], EmptyFilterPolicy::ShowNone);
    let before = filter.query_value();

    filter.toggle("Cultural");
    assert_eq!(filter.query_value(), "Cultural,Food,Travel");
    filter.toggle("Cultural");

    assert_eq!(filter.query_value(), before);
}
