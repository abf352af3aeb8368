//! Document-backed record source
//!
//! Decodes raw memory documents, as the hosted backend stores them,
//! into [`MealRecord`]s. A memory document carries soft-delete flags
//! and a `metadata` array of analyses; only documents with a
//! `nutrition` analysis become meal records.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{FoodItem, MealRecord};

use super::{RecordSource, StoreResult};

/// A raw memory document as stored by the backend
#[derive(Debug, Deserialize)]
struct RawMemoryDoc {
    id: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    discarded: bool,
    #[serde(default)]
    metadata: Vec<RawAnalysis>,
}

/// One analysis attached to a memory
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    analysis_type: String,
    #[serde(default)]
    nutrition_data: Option<RawNutritionData>,
}

#[derive(Debug, Deserialize)]
struct RawNutritionData {
    meal_type: String,
    total_calories: f64,
    #[serde(default)]
    foods: Vec<FoodItem>,
    #[serde(default)]
    dashboard_summary: Option<String>,
}

impl RawMemoryDoc {
    /// Turn a document into a meal record, if it is live and carries a
    /// nutrition analysis.
    fn into_meal_record(self) -> Option<MealRecord> {
        if self.deleted || self.discarded {
            return None;
        }

        let nutrition = self
            .metadata
            .into_iter()
            .find(|m| m.analysis_type == "nutrition")
            .and_then(|m| m.nutrition_data)?;

        Some(MealRecord {
            id: self.id,
            created_at: self.created_at,
            meal_type: nutrition.meal_type,
            total_calories: nutrition.total_calories,
            foods: nutrition.foods,
            dashboard_summary: nutrition.dashboard_summary,
        })
    }
}

/// In-memory store of raw JSON memory documents, keyed by user id.
///
/// Stands in for the hosted document backend in tests and offline use.
/// Documents are held in their raw JSON form and decoded on read, the
/// same way the dashboard decodes fetched documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    users: HashMap<String, Vec<Value>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file mapping user ids to document
    /// arrays: `{ "<uid>": [ {...}, ... ] }`.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let users: HashMap<String, Vec<Value>> = serde_json::from_str(&raw)?;
        Ok(Self { users })
    }

    /// Add a raw document for a user.
    pub fn insert(&mut self, uid: &str, doc: Value) {
        self.users.entry(uid.to_string()).or_default().push(doc);
    }
}

impl RecordSource for DocumentStore {
    /// Matches the backend query semantics: documents are ordered
    /// newest-first and capped at `page_size` before the
    /// deleted/discarded/nutrition filter runs.
    fn nutrition_records(&self, uid: &str, page_size: usize) -> StoreResult<Vec<MealRecord>> {
        let Some(docs) = self.users.get(uid) else {
            return Ok(Vec::new());
        };

        let mut decoded: Vec<RawMemoryDoc> = Vec::with_capacity(docs.len());
        for doc in docs {
            match serde_json::from_value(doc.clone()) {
                Ok(doc) => decoded.push(doc),
                Err(e) => {
                    tracing::warn!("skipping undecodable memory document for {uid}: {e}");
                }
            }
        }

        decoded.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        decoded.truncate(page_size);

        Ok(decoded
            .into_iter()
            .filter_map(RawMemoryDoc::into_meal_record)
            .collect())
    }
}
