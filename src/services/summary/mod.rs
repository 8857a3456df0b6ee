// Summary service
// Totals shown under the weekly grid, computed over the visible activities

use std::collections::BTreeMap;

use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::utils::date::format_price;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSummary {
    pub total_cost: f64,
    pub category_counts: BTreeMap<String, usize>,
    pub visible_count: usize,
}

impl WeekSummary {
    /// Summarise exactly the activities the filter lets through.
    pub fn compute(data: &WeekData, filter: &CategoryFilterSet) -> Self {
        visible_activities(data, filter).fold(Self::default(), |mut summary, activity| {
            summary.total_cost += activity.price;
            *summary
                .category_counts
                .entry(activity.category.clone())
                .or_insert(0) += 1;
            summary.visible_count += 1;
            summary
        })
    }

    /// `Total Cost: $10.00`
    pub fn format_total_cost(&self) -> String {
        format!("Total Cost: {}", format_price(self.total_cost))
    }

    /// `Food: 2` style badge labels, ordered by category name.
    pub fn category_badges(&self) -> Vec<String> {
        self.category_counts
            .iter()
            .map(|(category, count)| format!("{}: {}", category, count))
            .collect()
    }
}

/// Visible activities in day order, then input order within a day.
pub fn visible_activities<'a>(
    data: &'a WeekData,
    filter: &'a CategoryFilterSet,
) -> impl Iterator<Item = &'a Activity> + 'a {
    data.values()
        .flatten()
        .filter(move |activity| filter.is_visible(activity))
}
