//! Omira Nutrition Core
//!
//! Daily nutrition aggregation for the Omira personal dashboard:
//! meal records in, a per-day summary of calories, macro shares,
//! meal-type counts and food-quality tallies out.

pub mod aggregate;
pub mod models;
pub mod store;

pub use aggregate::{select_todays_records, summarize, RecordWarning, SummaryOutcome};
pub use models::{
    DailyNutritionSummary, FoodItem, MacroShares, Macros, MealCounts, MealRecord, MealType,
    Quality, QualityBreakdown,
};
pub use store::{DocumentStore, RecordSource, StoreError, StoreResult, DEFAULT_PAGE_SIZE};
