//! Meal record model
//!
//! One logged eating event as stored by the document backend: a
//! timestamp, a meal-type label, a calorie total, and the foods eaten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Parse a meal-type label, case-insensitively.
    ///
    /// Returns `None` for unrecognized labels so callers can report
    /// them instead of silently dropping the record from the tally.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

/// A meal record as supplied by the record source
///
/// `meal_type` is kept as the raw string it was logged with, for the
/// same reason as `FoodItem::quality`: validation happens during
/// aggregation, where a bad label can be reported with its record id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub meal_type: String,
    pub total_calories: f64,
    pub foods: Vec<FoodItem>,
    /// One-line description shown in the memories view; not aggregated.
    #[serde(default)]
    pub dashboard_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meal_type_known_labels() {
        assert_eq!(MealType::parse("breakfast"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("lunch"), Some(MealType::Lunch));
        assert_eq!(MealType::parse("dinner"), Some(MealType::Dinner));
        assert_eq!(MealType::parse("snack"), Some(MealType::Snack));
    }

    #[test]
    fn test_parse_meal_type_case_insensitive() {
        assert_eq!(MealType::parse("BREAKFAST"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("Dinner"), Some(MealType::Dinner));
    }

    #[test]
    fn test_parse_meal_type_unknown_label() {
        assert_eq!(MealType::parse("brunch"), None);
        assert_eq!(MealType::parse(""), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for meal in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert_eq!(MealType::parse(meal.as_str()), Some(meal));
        }
    }
}
