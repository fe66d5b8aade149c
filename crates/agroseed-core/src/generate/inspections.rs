//! # Inspection Generator
//!
//! Produces `inspections` rows joining two parent tables: `report_id`
//! sampled proportionally to how much damage activity the report's plant
//! has seen, `inspector_id` sampled uniformly and independently. Earlier
//! inspection dates are favored with linearly decaying weights.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{AgroSeedError, Result};
use crate::sample::dates::{business_days, linear_decay_weights};
use crate::sample::{pick_uniform, pick_weighted, sample_weighted};
use crate::store::Store;
use crate::value::{RowSet, Value};

/// Fixed vocabulary of plant-health findings for the notes column.
const NOTE_VOCABULARY: [&str; 20] = [
    "pest infestation",
    "fungal infection",
    "bacterial blight",
    "viral disease",
    "root rot",
    "leaf spot",
    "stem borer",
    "weevil attack",
    "aphid damage",
    "mite infestation",
    "drought stress",
    "frost injury",
    "hail damage",
    "nutrient deficiency",
    "soil erosion",
    "waterlogging",
    "sun scorch",
    "wind damage",
    "fruit drop",
    "wilting",
];

/// Inspection window bounds (inclusive).
const WINDOW_START: (i32, u32, u32) = (2024, 10, 15);
const WINDOW_END: (i32, u32, u32) = (2025, 8, 31);

/// Generate `n` inspection rows referencing persisted damage reports and
/// inspectors.
pub async fn generate_inspections(
    store: &Store,
    n: usize,
    rng: &mut impl Rng,
) -> Result<RowSet> {
    let report_weights = store.report_weights().await?;
    if report_weights.is_empty() {
        return Err(AgroSeedError::empty_population(
            "damage_reports table has no rows; persist damage reports before generating inspections",
        ));
    }

    let inspector_ids = store.inspector_ids().await?;
    if inspector_ids.is_empty() {
        return Err(AgroSeedError::empty_population(
            "inspectors table has no rows; persist inspectors before generating inspections",
        ));
    }

    let (report_ids, freqs): (Vec<i64>, Vec<i64>) = report_weights.into_iter().unzip();
    let weights: Vec<f64> = freqs.into_iter().map(|f| f as f64).collect();
    let report_pool = sample_weighted(&report_ids, &weights, n, rng)?;

    let window = business_days(ymd(WINDOW_START), ymd(WINDOW_END));
    let date_weights = linear_decay_weights(window.len());

    let mut rows = RowSet::new(["report_id", "inspector_id", "notes", "inspection_date"]);
    for _ in 0..n {
        let report_id = *pick_uniform(&report_pool, rng)?;
        let inspector_id = *pick_uniform(&inspector_ids, rng)?;
        let notes = *pick_uniform(&NOTE_VOCABULARY, rng)?;
        let inspection_date = *pick_weighted(&window, &date_weights, rng)?;
        rows.push(vec![
            Value::Int(report_id),
            Value::Int(inspector_id),
            Value::text(notes),
            Value::Date(inspection_date),
        ]);
    }
    Ok(rows)
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}
