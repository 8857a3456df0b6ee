//! Category filter model.
//!
//! Visibility is decided here and nowhere else: the layout, the summaries
//! and the printable export all ask [`CategoryFilterSet::is_visible`].

use std::collections::BTreeSet;

use crate::models::activity::Activity;
use crate::models::settings::EmptyFilterPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryFilterSet {
    selected: BTreeSet<String>,
    empty_policy: EmptyFilterPolicy,
}

impl CategoryFilterSet {
    pub fn new(empty_policy: EmptyFilterPolicy) -> Self {
        Self {
            selected: BTreeSet::new(),
            empty_policy,
        }
    }

    /// Filter with every given category selected.
    pub fn with_categories<I, S>(categories: I, empty_policy: EmptyFilterPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::new(empty_policy);
        filter.set(categories);
        filter
    }

    pub fn empty_policy(&self) -> EmptyFilterPolicy {
        self.empty_policy
    }

    pub fn set_empty_policy(&mut self, policy: EmptyFilterPolicy) {
        self.empty_policy = policy;
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Replace the whole selection (category form submission).
    pub fn set<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = categories.into_iter().map(Into::into).collect();
    }

    /// Flip one category; returns whether it is selected afterwards.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.selected.remove(category) {
            false
        } else {
            self.selected.insert(category.to_string());
            true
        }
    }

    /// Add every given category to the selection.
    pub fn select_all<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.extend(categories.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_visible(&self, activity: &Activity) -> bool {
        if self.selected.is_empty() {
            return self.empty_policy == EmptyFilterPolicy::ShowAll;
        }
        self.selected.contains(&activity.category)
    }

    /// Value of the `categories=` query parameter: comma-joined, each name
    /// URL-encoded. Empty when nothing is selected.
    pub fn query_value(&self) -> String {
        self.selected
            .iter()
            .map(|category| urlencoding::encode(category).into_owned())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Server-side category restriction for a fetch. An empty list means
    /// unrestricted; client-side visibility still applies the empty policy.
    pub fn fetch_categories(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn activity(category: &str) -> Activity {
        Activity {
            id: 1,
            title: "Test".into(),
            location: String::new(),
            category: category.into(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            price: 0.0,
            date: NaiveDate::from_ymd_opt(2024, 10, 29).unwrap(),
            description: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_selected_category_is_visible() {
        let filter = CategoryFilterSet::with_categories(["Food"], EmptyFilterPolicy::ShowNone);
        assert!(filter.is_visible(&activity("Food")));
        assert!(!filter.is_visible(&activity("Travel")));
    }

    #[test]
    fn test_empty_selection_follows_policy() {
        let none = CategoryFilterSet::new(EmptyFilterPolicy::ShowNone);
        assert!(!none.is_visible(&activity("Food")));

        let all = CategoryFilterSet::new(EmptyFilterPolicy::ShowAll);
        assert!(all.is_visible(&activity("Food")));
        assert!(all.is_visible(&activity("")));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut filter = CategoryFilterSet::new(EmptyFilterPolicy::ShowNone);
        assert!(filter.toggle("Cultural"));
        assert!(filter.is_selected("Cultural"));
        assert!(!filter.toggle("Cultural"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_select_all_extends_selection() {
        let mut filter = CategoryFilterSet::with_categories(["Food"], EmptyFilterPolicy::ShowNone);
        filter.select_all(["Travel", "Food"]);
        assert_eq!(filter.selected().collect::<Vec<_>>(), vec!["Food", "Travel"]);
    }

    #[test]
    fn test_query_value_is_encoded_and_sorted() {
        let filter = CategoryFilterSet::with_categories(
            ["Food", "Arts & Crafts"],
            EmptyFilterPolicy::ShowNone,
        );
        assert_eq!(filter.query_value(), "Arts%20%26%20Crafts,Food");
        assert_eq!(CategoryFilterSet::default().query_value(), "");
    }
}
