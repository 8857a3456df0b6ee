//! Trip activity store.
//! SQLite-backed CRUD plus the day-keyed weekly query served to the calendar,
//! split across focused submodules.

use rusqlite::Connection;

mod bulk;
pub mod crud;
pub mod queries;
mod sample;
mod shared;

pub use bulk::{parse_bulk_json, BulkActivityInput};

/// Service for managing trip activities stored in SQLite.
pub struct ActivityService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::NewActivity;
    use crate::models::week::FetchRange;
    use crate::services::database::Database;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn activity(title: &str, category: &str, day: NaiveDate, start: u32, end: u32) -> NewActivity {
        NewActivity::new(title, category, day, time(start, 0), time(end, 0))
    }

    #[test]
    fn test_create_and_get_activity() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let created = service
            .create(
                activity("Museum", "Cultural", date(10, 29), 9, 11)
                    .location("Hanoi")
                    .description("Fine arts")
                    .price(3.5)
                    .coordinates(21.0, 105.8),
            )
            .unwrap();

        assert!(created.id > 0);
        let fetched = service.get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_missing_activity() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());
        assert!(service.get(999).unwrap().is_none());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());
        let result = service.create(activity("  ", "Food", date(10, 29), 9, 10));
        assert!(result.is_err());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_activity() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let mut created = service
            .create(activity("Dinner", "Food", date(10, 29), 18, 19))
            .unwrap();
        created.price = 22.0;
        created.end_time = time(20, 30);
        service.update(&created).unwrap();

        let fetched = service.get(created.id).unwrap().unwrap();
        assert_eq!(fetched.price, 22.0);
        assert_eq!(fetched.end_time, time(20, 30));
    }

    #[test]
    fn test_update_missing_activity_fails() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());
        let ghost = activity("Ghost", "Food", date(10, 29), 9, 10).into_activity(42);
        assert!(service.update(&ghost).is_err());
    }

    #[test]
    fn test_delete_activity() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let created = service
            .create(activity("Walk", "Sightseeing", date(10, 29), 9, 10))
            .unwrap();
        service.delete(created.id).unwrap();

        assert!(service.get(created.id).unwrap().is_none());
        assert!(service.delete(created.id).is_err());
    }

    #[test]
    fn test_list_all_is_ordered() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        service.create(activity("Late", "Food", date(10, 30), 18, 19)).unwrap();
        service.create(activity("Early", "Food", date(10, 30), 8, 9)).unwrap();
        service.create(activity("Before", "Travel", date(10, 29), 20, 21)).unwrap();

        let titles: Vec<String> = service.list_all().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Before", "Early", "Late"]);
    }

    #[test]
    fn test_find_in_range_is_inclusive() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        service.create(activity("Before", "Food", date(10, 27), 9, 10)).unwrap();
        service.create(activity("First", "Food", date(10, 28), 9, 10)).unwrap();
        service.create(activity("Last", "Food", date(11, 3), 9, 10)).unwrap();
        service.create(activity("After", "Food", date(11, 4), 9, 10)).unwrap();

        let found = service.find_in_range(date(10, 28), date(11, 3), &[]).unwrap();
        let titles: Vec<&str> = found.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Last"]);
    }

    #[test]
    fn test_find_in_range_with_categories() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        service.create(activity("Pho", "Food", date(10, 29), 12, 13)).unwrap();
        service.create(activity("Bus", "Travel", date(10, 29), 8, 9)).unwrap();
        service.create(activity("Show", "Cultural", date(10, 29), 19, 20)).unwrap();

        let categories = vec!["Food".to_string(), "Cultural".to_string()];
        let found = service
            .find_in_range(date(10, 28), date(11, 3), &categories)
            .unwrap();
        let titles: Vec<&str> = found.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Pho", "Show"]);
    }

    #[test]
    fn test_weekly_view_data_has_every_day() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        service.create(activity("Cruise", "Sightseeing", date(10, 30), 8, 17)).unwrap();
        service.create(activity("Breakfast", "Food", date(10, 30), 7, 8)).unwrap();

        let range = FetchRange {
            start: date(10, 28),
            end: date(11, 3),
        };
        let week = service.weekly_view_data(&range, &[]).unwrap();

        assert_eq!(week.len(), 7);
        assert!(week[&date(10, 28)].is_empty());
        let titles: Vec<&str> = week[&date(10, 30)].iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Breakfast", "Cruise"]);
    }

    #[test]
    fn test_bulk_add_parses_us_date_and_twelve_hour_times() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let inputs = parse_bulk_json(
            r#"{"activities": [
                {"date": "10/29/2024", "start_time": "9:00 AM", "end_time": "1:30 PM",
                 "title": "Old Quarter", "location": "Hanoi", "description": "Walk",
                 "category": "Sightseeing", "price": 0, "latitude": 21.03, "longitude": 105.85},
                {"date": "10/30/2024", "start_time": "06:15 PM", "end_time": "08:00 PM",
                 "title": "Dinner", "location": "Hanoi", "description": null,
                 "category": "Food", "price": 12.5}
            ]}"#,
        )
        .unwrap();

        assert_eq!(service.bulk_add(&inputs).unwrap(), 2);

        let all = service.list_all().unwrap();
        assert_eq!(all[0].start_time, time(9, 0));
        assert_eq!(all[0].end_time, time(13, 30));
        assert_eq!(all[0].latitude, Some(21.03));
        assert_eq!(all[1].date, date(10, 30));
        assert_eq!(all[1].start_time, time(18, 15));
        assert_eq!(all[1].longitude, None);
    }

    #[test]
    fn test_bulk_add_is_all_or_nothing() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let good = BulkActivityInput {
            date: "10/29/2024".into(),
            start_time: "9:00 AM".into(),
            end_time: "10:00 AM".into(),
            title: "Good".into(),
            location: String::new(),
            description: None,
            category: "Food".into(),
            price: 1.0,
            latitude: None,
            longitude: None,
        };
        let bad = BulkActivityInput {
            date: "2024-10-29".into(),
            title: "Bad".into(),
            ..good.clone()
        };

        let err = service.bulk_add(&[good, bad]).unwrap_err();
        assert!(format!("{:#}", err).contains("Bad"));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_seed_sample_trip_only_when_empty() {
        let db = setup_test_db();
        let service = ActivityService::new(db.connection());

        let inserted = service.seed_sample_trip().unwrap();
        assert!(inserted > 0);
        assert_eq!(service.count().unwrap(), inserted as i64);
        assert_eq!(service.seed_sample_trip().unwrap(), 0);

        let all = service.list_all().unwrap();
        assert!(all.iter().any(|a| a.title == "Ha Long Bay Cruise"));
        assert!(all.iter().all(|a| a.date >= date(10, 28) && a.date <= date(11, 13)));
    }
}
