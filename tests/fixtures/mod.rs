// Test fixtures - reusable test data
// Provides a consistent trip week across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use trip_calendar::models::activity::{Activity, NewActivity, WeekData};
use trip_calendar::models::week::FetchRange;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Oct 28, 2024 (first day of the sample trip)
    pub fn trip_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 28).unwrap()
    }

    pub fn day(offset: i64) -> NaiveDate {
        trip_start() + chrono::Duration::days(offset)
    }

    /// The Monday-to-Sunday week containing the trip start
    pub fn trip_week() -> FetchRange {
        FetchRange {
            start: trip_start(),
            end: day(6),
        }
    }
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Sample activities for testing
pub mod activities {
    use super::*;

    pub fn new_activity(
        title: &str,
        category: &str,
        date: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
        price: f64,
    ) -> NewActivity {
        NewActivity::new(title, category, date, time(start.0, start.1), time(end.0, end.1))
            .location("Hanoi, Vietnam")
            .price(price)
    }

    pub fn activity(id: i64, category: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Activity {
        new_activity(&format!("Activity {}", id), category, date, start, end, 10.0).into_activity(id)
    }

    /// Two days of a trip week, deliberately including an overlap on day one
    pub fn sample_week() -> WeekData {
        let mut data = WeekData::new();
        data.insert(
            dates::day(0),
            vec![
                activity(1, "Travel", dates::day(0), (9, 0), (10, 0)),
                activity(2, "Food", dates::day(0), (9, 30), (10, 30)),
                activity(3, "Cultural", dates::day(0), (14, 0), (17, 0)),
            ],
        );
        data.insert(
            dates::day(2),
            vec![activity(4, "Sightseeing", dates::day(2), (8, 15), (11, 45))],
        );
        data
    }
}
