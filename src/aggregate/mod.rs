//! Nutrition aggregation module
//!
//! Pure daily-summary computation over already-fetched meal records.

pub mod daily;
pub mod warning;

pub use daily::{select_todays_records, summarize, SummaryOutcome};
pub use warning::RecordWarning;
