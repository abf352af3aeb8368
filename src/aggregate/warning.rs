//! Data-quality warnings
//!
//! Problems found in individual records during aggregation. Warnings
//! never abort the computation; each one names what was excluded.

use thiserror::Error;

/// A data-quality problem in a single meal record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordWarning {
    /// Meal type outside breakfast/lunch/dinner/snack. The record's
    /// calories and macros still count; only the meal tally skips it.
    #[error("record {record_id}: unrecognized meal type {value:?}")]
    UnknownMealType { record_id: String, value: String },

    /// Quality label outside healthy/neutral/unhealthy. Scoped to the
    /// quality breakdown; the food's macros still count.
    #[error("record {record_id}: food {food:?} has unrecognized quality {value:?}")]
    UnknownQuality {
        record_id: String,
        food: String,
        value: String,
    },

    /// A negative calorie or macro value. The whole record is rejected.
    #[error("record {record_id}: negative {field}")]
    NegativeValue {
        record_id: String,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display_names_the_record() {
        let warning = RecordWarning::UnknownMealType {
            record_id: "m1".to_string(),
            value: "brunch".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "record m1: unrecognized meal type \"brunch\""
        );
    }
}
