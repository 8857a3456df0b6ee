use super::ActivityService;
use crate::models::activity::NewActivity;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

fn day(d: u32) -> NaiveDate {
    let (month, day) = if d > 31 { (11, d - 31) } else { (10, d) };
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

/// Vietnam itinerary used to populate an empty store. Days past 31 roll into
/// November.
fn sample_trip() -> Vec<NewActivity> {
    vec![
        NewActivity::new("Flight to Hanoi", "Travel", day(28), at(7, 15), at(11, 45))
            .location("Noi Bai International Airport")
            .price(420.0)
            .coordinates(21.2212, 105.8072),
        NewActivity::new("Check in: Old Quarter Hotel", "Accommodation", day(28), at(14, 0), at(15, 0))
            .location("Hang Bac, Hanoi")
            .price(65.0)
            .coordinates(21.0340, 105.8530),
        NewActivity::new("Visit Hanoi Old Quarter", "Sightseeing", day(29), at(9, 0), at(12, 0))
            .location("Hanoi Old Quarter, Vietnam")
            .description("Walk the 36 streets and Hoan Kiem Lake")
            .coordinates(21.0338, 105.8500),
        NewActivity::new("Pho lunch", "Food", day(29), at(11, 30), at(12, 30))
            .location("Pho Gia Truyen, Hanoi")
            .price(4.5),
        NewActivity::new("Water puppet show", "Cultural", day(29), at(18, 30), at(19, 30))
            .location("Thang Long Water Puppet Theatre")
            .price(8.0)
            .coordinates(21.0318, 105.8531),
        NewActivity::new("Ha Long Bay Cruise", "Sightseeing", day(30), at(8, 0), at(17, 0))
            .location("Ha Long Bay, Vietnam")
            .description("Day cruise with kayaking stop")
            .price(95.0)
            .coordinates(20.9101, 107.1839),
        NewActivity::new("Temple of Literature", "Historical", day(31), at(9, 30), at(11, 0))
            .location("Dong Da, Hanoi")
            .price(1.5)
            .coordinates(21.0294, 105.8355),
        NewActivity::new("Flight to Da Nang", "Travel", day(31), at(15, 0), at(16, 20))
            .location("Noi Bai International Airport")
            .price(70.0),
        NewActivity::new("Explore Hoi An Ancient Town", "Historical", day(32), at(10, 0), at(16, 0))
            .location("Hoi An, Vietnam")
            .price(5.0)
            .coordinates(15.8801, 108.3380),
        NewActivity::new("Lantern night market", "Entertainment", day(32), at(18, 0), at(21, 0))
            .location("Hoi An Night Market")
            .coordinates(15.8770, 108.3269),
    ]
}

impl<'a> ActivityService<'a> {
    /// Insert the sample itinerary when the store has no activities.
    /// Returns the number of activities inserted.
    pub fn seed_sample_trip(&self) -> Result<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }

        let activities = sample_trip();
        for activity in &activities {
            self.create(activity.clone())?;
        }

        log::info!("Sample activities added ({})", activities.len());
        Ok(activities.len())
    }
}
