//! Category model for trip activities.
//!
//! Categories form an open enumeration: activities may carry any string, and
//! the built-in list only supplies the filter checkboxes and block colours.

use serde::{Deserialize, Serialize};

/// Colour used for activities whose category is not in the built-in list.
pub const FALLBACK_COLOR: &str = "#6B7280";

/// A named activity category with its display colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, also the value matched against `Activity::category`
    pub name: String,
    /// Hex color code (e.g., "#3B82F6")
    pub color: String,
    /// Optional emoji shown next to the name
    pub icon: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: Some(icon.into()),
        }
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong);
        }

        if !is_valid_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor);
        }

        Ok(())
    }

    /// Icon + name for checkbox labels and badges.
    pub fn display_name(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong,
    InvalidColor,
}

impl std::fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong => write!(f, "Category name must be 50 characters or less"),
            Self::InvalidColor => write!(f, "Invalid color format (use hex like #FF0000)"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Check if a string is a valid hex color code.
fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    // Accept 3, 6, or 8 character hex codes
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Categories offered by the activity form and the category filter.
pub fn default_trip_categories() -> Vec<Category> {
    vec![
        Category::with_icon("Travel", "#3B82F6", "✈"),
        Category::with_icon("Accommodation", "#8B5CF6", "🏨"),
        Category::with_icon("Sightseeing", "#10B981", "📷"),
        Category::with_icon("Cultural", "#F59E0B", "🎭"),
        Category::with_icon("Food", "#EF4444", "🍜"),
        Category::with_icon("Entertainment", "#EC4899", "🎉"),
        Category::with_icon("Historical", "#92400E", "🏛"),
    ]
}

/// Block colour for a category name, falling back to [`FALLBACK_COLOR`].
pub fn color_for(category: &str) -> String {
    default_trip_categories()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(category))
        .map(|c| c.color)
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}
