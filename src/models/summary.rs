//! Daily nutrition summary
//!
//! The value the aggregation produces. Recomputed on every call from
//! the input records and the reference day; never persisted or mutated
//! in place.

use serde::Serialize;

use super::{Macros, MealType, Quality};

/// Record counts per meal type; every key is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MealCounts {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
    pub snack: usize,
}

impl MealCounts {
    pub fn increment(&mut self, meal: MealType) {
        match meal {
            MealType::Breakfast => self.breakfast += 1,
            MealType::Lunch => self.lunch += 1,
            MealType::Dinner => self.dinner += 1,
            MealType::Snack => self.snack += 1,
        }
    }
}

/// Food counts per quality label; every key is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct QualityBreakdown {
    pub healthy: usize,
    pub neutral: usize,
    pub unhealthy: usize,
}

impl QualityBreakdown {
    pub fn increment(&mut self, quality: Quality) {
        match quality {
            Quality::Healthy => self.healthy += 1,
            Quality::Neutral => self.neutral += 1,
            Quality::Unhealthy => self.unhealthy += 1,
        }
    }
}

/// Percentage share of each macro, rounded to whole points.
///
/// The three rounded values can sum to 99-101 rather than exactly 100;
/// that is expected, not a bug.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MacroShares {
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

impl MacroShares {
    /// Percentage shares of the given macro totals.
    ///
    /// All three shares are zero when the macro sum is zero; the
    /// division is guarded, this never produces NaN.
    pub fn from_totals(totals: Macros) -> Self {
        let sum = totals.sum();
        if sum <= 0.0 {
            return Self::default();
        }
        Self {
            protein: pct(totals.protein, sum),
            carbs: pct(totals.carbs, sum),
            fats: pct(totals.fats, sum),
        }
    }
}

fn pct(part: f64, whole: f64) -> i64 {
    (part / whole * 100.0).round() as i64
}

/// Aggregated nutrition for a single calendar day
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DailyNutritionSummary {
    pub total_calories: f64,
    /// Calories per counted record, rounded; zero when nothing counted.
    pub average_calories: i64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub average_macros: MacroShares,
    pub meal_counts: MealCounts,
    pub quality_breakdown: QualityBreakdown,
}

impl DailyNutritionSummary {
    /// The all-zero summary returned when no records match the day.
    /// Count maps keep all their keys, set to zero.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_shares_zero_sum() {
        assert_eq!(
            MacroShares::from_totals(Macros::zero()),
            MacroShares::default()
        );
    }

    #[test]
    fn test_macro_shares_even_split() {
        let shares = MacroShares::from_totals(Macros {
            protein: 30.0,
            carbs: 30.0,
            fats: 30.0,
        });
        assert_eq!(shares.protein, 33);
        assert_eq!(shares.carbs, 33);
        assert_eq!(shares.fats, 33);
    }

    #[test]
    fn test_macro_shares_rounding_can_overshoot_100() {
        // 20/80, 50/80, 10/80 -> 25%, 62.5%, 12.5%; the halves round up
        let shares = MacroShares::from_totals(Macros {
            protein: 20.0,
            carbs: 50.0,
            fats: 10.0,
        });
        assert_eq!(shares.protein, 25);
        assert_eq!(shares.carbs, 63);
        assert_eq!(shares.fats, 13);

        let sum = shares.protein + shares.carbs + shares.fats;
        assert!((sum - 100).abs() <= 2);
    }

    #[test]
    fn test_count_maps_default_fully_keyed() {
        let summary = DailyNutritionSummary::empty();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["meal_counts"]["breakfast"], 0);
        assert_eq!(json["meal_counts"]["lunch"], 0);
        assert_eq!(json["meal_counts"]["dinner"], 0);
        assert_eq!(json["meal_counts"]["snack"], 0);
        assert_eq!(json["quality_breakdown"]["healthy"], 0);
        assert_eq!(json["quality_breakdown"]["neutral"], 0);
        assert_eq!(json["quality_breakdown"]["unhealthy"], 0);
    }
}
