//! # Planting Generator
//!
//! Produces `crop_plants` rows whose `crop_id` values reference persisted
//! crops, with an injected popularity skew: a Dirichlet weight per crop
//! governs how often it appears in this run, independent of any real
//! signal. The weighted subsample plus uniform-per-row draw adds a second
//! sampling layer: crops outside the subsample vanish for the whole run.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{AgroSeedError, Result};
use crate::generate::REGIONS;
use crate::sample::dates::{business_days, front_loaded_weights};
use crate::sample::{dirichlet_weights, pick_uniform, pick_weighted, sample_weighted};
use crate::store::Store;
use crate::value::{RowSet, Value};

/// Size of the weighted crop subsample the per-row draws pick from.
const SUBSAMPLE_DRAWS: usize = 20;

/// Region shares for new plantings.
const REGION_WEIGHTS: [f64; 3] = [0.37, 0.35, 0.27];

/// Planting season bounds (inclusive).
const SEASON_START: (i32, u32, u32) = (2024, 4, 1);
const SEASON_END: (i32, u32, u32) = (2024, 8, 31);

/// Generate `n` planting rows referencing the persisted crop catalog.
pub async fn generate_plantings(
    store: &Store,
    n: usize,
    rng: &mut impl Rng,
) -> Result<RowSet> {
    let crop_ids = store.crop_ids().await?;
    if crop_ids.is_empty() {
        return Err(AgroSeedError::empty_population(
            "crops table has no rows; persist the crop catalog before generating plantings",
        ));
    }

    // Injected skew: a fresh Dirichlet share per crop each run, then a
    // weighted subsample the per-row draws select from uniformly.
    let crop_weights = dirichlet_weights(crop_ids.len(), rng);
    let subsample = sample_weighted(&crop_ids, &crop_weights, SUBSAMPLE_DRAWS, rng)?;

    let season = business_days(ymd(SEASON_START), ymd(SEASON_END));
    let date_weights = front_loaded_weights(season.len(), 0.70, 5.0, 2.5);

    let mut rows = RowSet::new(["crop_id", "region", "plant_date"]);
    for _ in 0..n {
        let crop_id = *pick_uniform(&subsample, rng)?;
        let region = *pick_weighted(&REGIONS, &REGION_WEIGHTS, rng)?;
        let plant_date = *pick_weighted(&season, &date_weights, rng)?;
        rows.push(vec![
            Value::Int(crop_id),
            Value::text(region),
            Value::Date(plant_date),
        ]);
    }
    Ok(rows)
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}
