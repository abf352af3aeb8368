//! Shared macro-gram value type
//!
//! Used when accumulating protein/carb/fat totals across food items.

use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Macro totals in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Macros {
    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// The macros of a single food item
    pub fn of_food(food: &FoodItem) -> Self {
        Self {
            protein: food.protein_g,
            carbs: food.carbs_g,
            fats: food.fats_g,
        }
    }

    /// Sum of all three macro totals
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Add another macro total to this one
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(protein: f64, carbs: f64, fats: f64) -> FoodItem {
        FoodItem {
            name: "test".to_string(),
            calories: 0.0,
            protein_g: protein,
            carbs_g: carbs,
            fats_g: fats,
            estimated_portion: None,
            quality: "neutral".to_string(),
        }
    }

    #[test]
    fn test_sum_over_foods() {
        let foods = vec![food(10.0, 20.0, 5.0), food(15.0, 30.0, 10.0)];
        let total: Macros = foods.iter().map(Macros::of_food).sum();

        assert_eq!(total.protein, 25.0);
        assert_eq!(total.carbs, 50.0);
        assert_eq!(total.fats, 15.0);
        assert_eq!(total.sum(), 90.0);
    }

    #[test]
    fn test_zero_is_additive_identity() {
        let m = Macros {
            protein: 1.0,
            carbs: 2.0,
            fats: 3.0,
        };
        assert_eq!(Macros::zero() + m, m);
    }
}
