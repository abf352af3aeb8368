//! Food item model
//!
//! A single food within a logged meal, with per-food macros and a
//! coarse healthiness classification.

use serde::{Deserialize, Serialize};

/// Food quality enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Healthy,
    Neutral,
    Unhealthy,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Healthy => "healthy",
            Quality::Neutral => "neutral",
            Quality::Unhealthy => "unhealthy",
        }
    }

    /// Parse a quality label, case-insensitively.
    ///
    /// Returns `None` for unrecognized labels so callers can report
    /// them instead of silently dropping the food from the breakdown.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "healthy" => Some(Quality::Healthy),
            "neutral" => Some(Quality::Neutral),
            "unhealthy" => Some(Quality::Unhealthy),
            _ => None,
        }
    }
}

/// A single food within a meal record
///
/// `quality` is kept as the raw string it was logged with; it is
/// validated during aggregation so malformed labels reach the
/// reporting point rather than failing at decode time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    /// Per-food calories as estimated at logging time. Not used by the
    /// daily aggregation, which works from the record-level total.
    #[serde(default)]
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    #[serde(default, rename = "estimatedPortion")]
    pub estimated_portion: Option<String>,
    pub quality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quality_known_labels() {
        assert_eq!(Quality::parse("healthy"), Some(Quality::Healthy));
        assert_eq!(Quality::parse("neutral"), Some(Quality::Neutral));
        assert_eq!(Quality::parse("unhealthy"), Some(Quality::Unhealthy));
    }

    #[test]
    fn test_parse_quality_case_insensitive() {
        assert_eq!(Quality::parse("Healthy"), Some(Quality::Healthy));
        assert_eq!(Quality::parse("UNHEALTHY"), Some(Quality::Unhealthy));
    }

    #[test]
    fn test_parse_quality_unknown_label() {
        assert_eq!(Quality::parse("bad-value"), None);
        assert_eq!(Quality::parse(""), None);
    }

    #[test]
    fn test_food_item_deserializes_stored_shape() {
        let food: FoodItem = serde_json::from_value(serde_json::json!({
            "name": "Oatmeal",
            "calories": 150.0,
            "protein_g": 5.0,
            "carbs_g": 27.0,
            "fats_g": 3.0,
            "estimatedPortion": "1 cup",
            "quality": "healthy"
        }))
        .unwrap();

        assert_eq!(food.name, "Oatmeal");
        assert_eq!(food.estimated_portion.as_deref(), Some("1 cup"));
        assert_eq!(Quality::parse(&food.quality), Some(Quality::Healthy));
    }
}
