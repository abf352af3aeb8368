//! Record supply boundary
//!
//! The dashboard's meal records live in a hosted document store. This
//! module defines the seam the aggregation reads through, plus a
//! document-backed implementation matching the stored shape.

pub mod document;

use thiserror::Error;

use crate::models::MealRecord;

pub use document::DocumentStore;

/// Default number of documents fetched per request.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read record store: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record store file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Source of a user's meal records.
pub trait RecordSource {
    /// Fetch up to `page_size` of the user's most recent meal records,
    /// newest first. Deleted and discarded records are never returned,
    /// nor are memories without a nutrition analysis.
    fn nutrition_records(&self, uid: &str, page_size: usize) -> StoreResult<Vec<MealRecord>>;
}
