// Settings module
// Persisted view preferences (single row in the settings table)

use std::fmt;
use std::str::FromStr;

/// How the weekly grid is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// One row per hour; multi-hour activities split into one fragment per row.
    #[default]
    Hourly,
    /// One full-day column per date with overlap stacking.
    DayColumn,
}

/// How the overlap tracker advances after each block in a day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Track the end of the most recently placed block.
    #[default]
    LastSeen,
    /// Track the latest end seen so far in the day.
    MonotonicMax,
}

/// Visibility when no category is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFilterPolicy {
    /// Nothing is visible until at least one category is ticked.
    #[default]
    ShowNone,
    /// An empty selection shows every category.
    ShowAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

macro_rules! string_enum {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        "Unknown {} value '{}'",
                        stringify!($ty),
                        other
                    )),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(LayoutMode { Hourly => "hourly", DayColumn => "day_column" });
string_enum!(OverlapPolicy { LastSeen => "last_seen", MonotonicMax => "monotonic_max" });
string_enum!(EmptyFilterPolicy { ShowNone => "show_none", ShowAll => "show_all" });
string_enum!(TimeFormat { TwelveHour => "12h", TwentyFourHour => "24h" });

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: Option<i64>,
    pub theme: String,
    pub use_system_theme: bool,
    pub first_day_of_week: u8,
    pub time_format: TimeFormat,
    pub layout_mode: LayoutMode,
    pub overlap_policy: OverlapPolicy,
    pub empty_filter_policy: EmptyFilterPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "light".to_string(),
            use_system_theme: false,
            first_day_of_week: 1, // Monday
            time_format: TimeFormat::TwelveHour,
            layout_mode: LayoutMode::Hourly,
            overlap_policy: OverlapPolicy::LastSeen,
            empty_filter_policy: EmptyFilterPolicy::ShowNone,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }
        if !matches!(self.theme.to_lowercase().as_str(), "light" | "dark") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }
        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hourly", LayoutMode::Hourly; "hourly layout")]
    #[test_case("day_column", LayoutMode::DayColumn; "day column layout")]
    fn test_layout_mode_parse(text: &str, expected: LayoutMode) {
        assert_eq!(text.parse::<LayoutMode>().unwrap(), expected);
        assert_eq!(expected.as_str(), text);
    }

    #[test_case("last_seen", OverlapPolicy::LastSeen; "last seen")]
    #[test_case("monotonic_max", OverlapPolicy::MonotonicMax; "monotonic max")]
    fn test_overlap_policy_parse(text: &str, expected: OverlapPolicy) {
        assert_eq!(text.parse::<OverlapPolicy>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "sideways".parse::<LayoutMode>().unwrap_err();
        assert!(err.contains("sideways"));
        assert!("".parse::<EmptyFilterPolicy>().is_err());
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.empty_filter_policy, EmptyFilterPolicy::ShowNone);
        assert_eq!(settings.time_format.to_string(), "12h");
    }

    #[test]
    fn test_invalid_first_day() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
