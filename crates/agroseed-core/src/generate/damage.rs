//! # Damage Report Generator
//!
//! Produces `damage_reports` rows whose `plant_id` values are sampled
//! through the two-stage pool: crops weighted by how often they were
//! planted, then a uniform planting within the chosen crop. Frequently
//! planted crops therefore accumulate more damage reports, and a crop with
//! zero plantings can never be referenced.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{AgroSeedError, Result};
use crate::sample::dates::{business_days_stepped, front_loaded_weights};
use crate::sample::{pick_uniform, pick_weighted, GroupedPool};
use crate::store::Store;
use crate::value::{RowSet, Value};

/// Damage categories with their draw weights, taken from observed report
/// distributions.
const DAMAGE_TYPES: [&str; 5] = ["disease", "drought", "pest", "flood", "others"];
const DAMAGE_WEIGHTS: [f64; 5] = [0.35, 0.3, 0.2, 1.0, 0.05];

/// Severity 1–10 draw weights; low severities dominate.
const SEVERITY_WEIGHTS: [f64; 10] = [5.0, 4.0, 3.0, 3.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0];

/// Reporting window bounds (inclusive); reports land on every third
/// business day of the window.
const WINDOW_START: (i32, u32, u32) = (2024, 10, 1);
const WINDOW_END: (i32, u32, u32) = (2025, 4, 30);

/// Generate `n` damage report rows referencing persisted plantings.
pub async fn generate_damage_reports(
    store: &Store,
    n: usize,
    rng: &mut impl Rng,
) -> Result<RowSet> {
    let counts = store.planting_counts_by_crop().await?;
    if counts.is_empty() {
        return Err(AgroSeedError::empty_population(
            "crop_plants table has no rows; persist plantings before generating damage reports",
        ));
    }

    let plantings = store.plantings_by_crop().await?;
    let mut pool: GroupedPool<i64, i64> = GroupedPool::new();
    for (crop_id, freq) in &counts {
        let members = plantings.get(crop_id).cloned().unwrap_or_default();
        pool.push_group(*crop_id, *freq as f64, members)?;
    }

    // Two-stage draws fill the plant pool; per-row draws then pick from it
    // uniformly, so the crop-frequency skew carries into every report.
    let plant_pool = pool.draw_members(n, rng)?;

    let window = business_days_stepped(ymd(WINDOW_START), ymd(WINDOW_END), 3);
    let date_weights = front_loaded_weights(window.len(), 0.35, 5.0, 3.5);
    let severities: Vec<i64> = (1..=10).collect();

    let mut rows = RowSet::new(["plant_id", "damage_type", "severity", "report_date"]);
    for _ in 0..n {
        let plant_id = *pick_uniform(&plant_pool, rng)?;
        let damage_type = *pick_weighted(&DAMAGE_TYPES, &DAMAGE_WEIGHTS, rng)?;
        let severity = *pick_weighted(&severities, &SEVERITY_WEIGHTS, rng)?;
        let report_date = *pick_weighted(&window, &date_weights, rng)?;
        rows.push(vec![
            Value::Int(plant_id),
            Value::text(damage_type),
            Value::Int(severity),
            Value::Date(report_date),
        ]);
    }
    Ok(rows)
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}
