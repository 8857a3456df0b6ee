use chrono::NaiveDate;

use super::MINUTES_PER_DAY;
use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::settings::OverlapPolicy;

/// An activity placed in a full-day column.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBlock {
    pub activity: Activity,
    /// Start offset in percent of the day.
    pub top_pct: f64,
    /// Duration in percent of the day.
    pub height_pct: f64,
    /// Share of this block's own duration already covered by the block
    /// tracked before it, in percent. Zero when there is no overlap.
    pub overlap_pct: f64,
}

impl StackedBlock {
    /// Top edge after pushing the block below the overlapped part.
    pub fn visible_top_pct(&self) -> f64 {
        self.top_pct + self.height_pct * self.overlap_pct / 100.0
    }

    /// Height left once the overlapped part is removed.
    pub fn visible_height_pct(&self) -> f64 {
        self.height_pct * (1.0 - self.overlap_pct / 100.0)
    }

    pub fn overlaps_previous(&self) -> bool {
        self.overlap_pct != 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub blocks: Vec<StackedBlock>,
}

/// Lay out each day as one column spanning 00:00 to 24:00.
///
/// Visible activities are stably sorted by start time. Walking the sorted list,
/// a block that starts before the tracked end of earlier blocks records how
/// much of it is overlapped; `policy` decides how the tracked end advances.
pub fn layout_day_columns(
    days: &[NaiveDate],
    data: &WeekData,
    filter: &CategoryFilterSet,
    policy: OverlapPolicy,
) -> Vec<DayColumn> {
    days.iter()
        .map(|date| DayColumn {
            date: *date,
            blocks: data
                .get(date)
                .map(|activities| stack_day(activities, filter, policy))
                .unwrap_or_default(),
        })
        .collect()
}

fn stack_day(
    activities: &[Activity],
    filter: &CategoryFilterSet,
    policy: OverlapPolicy,
) -> Vec<StackedBlock> {
    let mut visible: Vec<&Activity> = activities.iter().filter(|a| filter.is_visible(a)).collect();
    visible.sort_by_key(|activity| activity.start_time);

    let mut last_end: Option<i64> = None;
    let mut blocks = Vec::with_capacity(visible.len());

    for activity in visible {
        let start = activity.start_minutes();
        let end = activity.end_minutes();
        let duration = activity.duration_minutes() as f64;

        let overlap_pct = match last_end {
            Some(tracked) if start < tracked => (tracked - start) as f64 / duration * 100.0,
            _ => 0.0,
        };

        blocks.push(StackedBlock {
            activity: activity.clone(),
            top_pct: start as f64 / MINUTES_PER_DAY * 100.0,
            height_pct: duration / MINUTES_PER_DAY * 100.0,
            overlap_pct,
        });

        last_end = Some(match (policy, last_end) {
            (OverlapPolicy::MonotonicMax, Some(tracked)) => tracked.max(end),
            _ => end,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::EmptyFilterPolicy;
    use chrono::NaiveTime;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn activity(id: i64, start: (u32, u32), end: (u32, u32)) -> Activity {
        Activity {
            id,
            title: format!("Activity {}", id),
            location: String::new(),
            category: "Sightseeing".into(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            price: 0.0,
            date: date(29),
            description: None,
            latitude: None,
            longitude: None,
        }
    }

    fn all() -> CategoryFilterSet {
        CategoryFilterSet::new(EmptyFilterPolicy::ShowAll)
    }

    fn column(activities: Vec<Activity>, policy: OverlapPolicy) -> DayColumn {
        let mut data = WeekData::new();
        data.insert(date(29), activities);
        layout_day_columns(&[date(29)], &data, &all(), policy).remove(0)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_overlapping_pair_pushed_down_by_half() {
        let col = column(
            vec![activity(1, (9, 0), (10, 0)), activity(2, (9, 30), (10, 30))],
            OverlapPolicy::LastSeen,
        );

        let a = &col.blocks[0];
        let b = &col.blocks[1];
        assert_eq!(a.overlap_pct, 0.0);
        assert!(approx(a.top_pct, 540.0 / 1440.0 * 100.0));
        assert!(approx(a.height_pct, 60.0 / 1440.0 * 100.0));

        assert!(approx(b.overlap_pct, 50.0));
        assert!(approx(b.visible_top_pct(), b.top_pct + b.height_pct / 2.0));
        assert!(approx(b.visible_height_pct(), b.height_pct / 2.0));
        assert!(b.overlaps_previous());
    }

    #[test]
    fn test_sorted_by_start_time() {
        let col = column(
            vec![
                activity(1, (15, 0), (16, 0)),
                activity(2, (8, 0), (9, 0)),
                activity(3, (11, 0), (12, 0)),
            ],
            OverlapPolicy::LastSeen,
        );
        let ids: Vec<i64> = col.blocks.iter().map(|b| b.activity.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(col.blocks.iter().all(|b| b.overlap_pct == 0.0));
    }

    #[test]
    fn test_equal_start_times_keep_input_order() {
        let col = column(
            vec![activity(7, (9, 0), (11, 0)), activity(4, (9, 0), (10, 0))],
            OverlapPolicy::LastSeen,
        );
        let ids: Vec<i64> = col.blocks.iter().map(|b| b.activity.id).collect();
        assert_eq!(ids, vec![7, 4]);
        // 120 overlapping minutes over a 60 minute block.
        assert!(approx(col.blocks[1].overlap_pct, 200.0));
    }

    #[test]
    fn test_last_seen_forgets_longer_predecessor() {
        // A 08:00-12:00, B 09:00-10:00, C 11:00-11:30
        let activities = vec![
            activity(1, (8, 0), (12, 0)),
            activity(2, (9, 0), (10, 0)),
            activity(3, (11, 0), (11, 30)),
        ];

        let last_seen = column(activities.clone(), OverlapPolicy::LastSeen);
        assert!(approx(last_seen.blocks[1].overlap_pct, 300.0));
        assert_eq!(last_seen.blocks[2].overlap_pct, 0.0);

        let monotonic = column(activities, OverlapPolicy::MonotonicMax);
        assert!(approx(monotonic.blocks[1].overlap_pct, 300.0));
        assert!(approx(monotonic.blocks[2].overlap_pct, 200.0));
    }

    #[test]
    fn test_zero_duration_overlap_is_not_finite() {
        let col = column(
            vec![activity(1, (9, 0), (10, 0)), activity(2, (9, 30), (9, 30))],
            OverlapPolicy::LastSeen,
        );
        assert_eq!(col.blocks[1].height_pct, 0.0);
        assert!(!col.blocks[1].overlap_pct.is_finite());
    }

    #[test]
    fn test_filtered_activities_do_not_affect_overlap() {
        let mut food = activity(1, (9, 0), (10, 0));
        food.category = "Food".into();
        let mut data = WeekData::new();
        data.insert(date(29), vec![food, activity(2, (9, 30), (10, 30))]);

        let filter = CategoryFilterSet::with_categories(["Sightseeing"], EmptyFilterPolicy::ShowNone);
        let cols = layout_day_columns(&[date(29)], &data, &filter, OverlapPolicy::LastSeen);

        assert_eq!(cols[0].blocks.len(), 1);
        assert_eq!(cols[0].blocks[0].overlap_pct, 0.0);
    }

    #[test]
    fn test_missing_days_get_empty_columns() {
        let cols = layout_day_columns(
            &[date(28), date(29)],
            &WeekData::new(),
            &all(),
            OverlapPolicy::MonotonicMax,
        );
        assert_eq!(cols.len(), 2);
        assert!(cols.iter().all(|c| c.blocks.is_empty()));
    }
}
