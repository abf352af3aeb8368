//! Daily nutrition summary computation
//!
//! Folds a user's meal records into a [`DailyNutritionSummary`] for one
//! calendar day. The computation is pure: no I/O, no clock reads, and
//! identical inputs always produce identical outputs. The reference day
//! is injected by the caller rather than read from system time.

use chrono::NaiveDate;

use crate::models::{
    DailyNutritionSummary, MacroShares, Macros, MealCounts, MealRecord, MealType, Quality,
    QualityBreakdown,
};

use super::RecordWarning;

/// The summary for a day plus the data-quality warnings collected
/// while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: DailyNutritionSummary,
    pub warnings: Vec<RecordWarning>,
}

/// Select the records logged on `today`.
///
/// Membership is calendar-day equality: a record belongs to the day iff
/// the year, month and day of its `created_at` match `today`. This is
/// not a rolling 24-hour window. Input order is preserved; no ordering
/// is assumed.
pub fn select_todays_records<'a>(
    records: &'a [MealRecord],
    today: NaiveDate,
) -> Vec<&'a MealRecord> {
    records
        .iter()
        .filter(|record| record.created_at.date_naive() == today)
        .collect()
}

/// Summarize the records logged on `today`.
///
/// Records outside the day are filtered out first. An empty day is not
/// an error: the result is the all-zero summary with fully-keyed count
/// maps. Malformed records are reported through the returned warnings
/// rather than dropped silently:
///
/// - an unrecognized meal type keeps the record's calories and macros
///   but skips its meal-count contribution;
/// - an unrecognized food quality keeps the food's macros but skips its
///   quality-breakdown contribution;
/// - a negative calorie or macro value rejects the whole record.
pub fn summarize(records: &[MealRecord], today: NaiveDate) -> SummaryOutcome {
    let mut warnings = Vec::new();

    let mut counted = 0usize;
    let mut total_calories = 0.0;
    let mut macros = Macros::zero();
    let mut meal_counts = MealCounts::default();
    let mut quality_breakdown = QualityBreakdown::default();

    for record in select_todays_records(records, today) {
        if let Some(warning) = validate_record(record) {
            tracing::warn!("{warning}");
            warnings.push(warning);
            continue;
        }

        counted += 1;
        total_calories += record.total_calories;

        match MealType::parse(&record.meal_type) {
            Some(meal) => meal_counts.increment(meal),
            None => {
                let warning = RecordWarning::UnknownMealType {
                    record_id: record.id.clone(),
                    value: record.meal_type.clone(),
                };
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }

        for food in &record.foods {
            macros = macros + Macros::of_food(food);

            match Quality::parse(&food.quality) {
                Some(quality) => quality_breakdown.increment(quality),
                None => {
                    let warning = RecordWarning::UnknownQuality {
                        record_id: record.id.clone(),
                        food: food.name.clone(),
                        value: food.quality.clone(),
                    };
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }
    }

    let average_calories = if counted == 0 {
        0
    } else {
        (total_calories / counted as f64).round() as i64
    };

    SummaryOutcome {
        summary: DailyNutritionSummary {
            total_calories,
            average_calories,
            total_protein: macros.protein,
            total_carbs: macros.carbs,
            total_fats: macros.fats,
            average_macros: MacroShares::from_totals(macros),
            meal_counts,
            quality_breakdown,
        },
        warnings,
    }
}

/// Check a record for negative numeric fields.
///
/// A negative total or macro gram invalidates the whole record; one
/// warning is enough, the first offence found is reported.
fn validate_record(record: &MealRecord) -> Option<RecordWarning> {
    if record.total_calories < 0.0 {
        return Some(RecordWarning::NegativeValue {
            record_id: record.id.clone(),
            field: "total_calories",
        });
    }

    for food in &record.foods {
        let field = if food.protein_g < 0.0 {
            "protein_g"
        } else if food.carbs_g < 0.0 {
            "carbs_g"
        } else if food.fats_g < 0.0 {
            "fats_g"
        } else {
            continue;
        };
        return Some(RecordWarning::NegativeValue {
            record_id: record.id.clone(),
            field,
        });
    }

    None
}
