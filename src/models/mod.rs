//! Data models
//!
//! Rust structs for meal records as they arrive from the document
//! backend, plus the daily summary value the aggregation produces.

mod food_item;
mod macros;
mod meal_record;
mod summary;

pub use food_item::{FoodItem, Quality};
pub use macros::Macros;
pub use meal_record::{MealRecord, MealType};
pub use summary::{DailyNutritionSummary, MacroShares, MealCounts, QualityBreakdown};
