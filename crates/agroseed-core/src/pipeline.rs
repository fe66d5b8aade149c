//! # Pipeline
//!
//! Runs the generators in dependency order, persisting every table before
//! the next generator reads it:
//!
//! ```text
//! crops → crop_plants → inspectors → damage_reports → inspections
//! ```
//!
//! Inspectors come before damage reports only because inspections need
//! both; any order that persists each parent before its children is valid.
//! A persistence failure aborts the run — every later table structurally
//! depends on the one that failed.

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::generate::{
    generate_crops, generate_damage_reports, generate_inspections, generate_inspectors,
    generate_plantings,
};
use crate::store::{upload, IfExists, Store};

/// Per-table row counts for one generation run. The crop catalog is fixed
/// and carries no count.
#[derive(Debug, Clone)]
pub struct PipelinePlan {
    pub plantings: usize,
    pub inspectors: usize,
    pub damage_reports: usize,
    pub inspections: usize,
    /// Upload mode applied to every table.
    pub mode: IfExists,
}

impl PipelinePlan {
    /// The same row count for every generated table.
    pub fn uniform(rows: usize) -> Self {
        Self {
            plantings: rows,
            inspectors: rows,
            damage_reports: rows,
            inspections: rows,
            mode: IfExists::Append,
        }
    }
}

/// Rows committed per table, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub table: &'static str,
    pub rows: usize,
}

/// Generate and persist all five tables.
///
/// Returns the committed row counts in generation order. Fails fast: the
/// first generation or upload error ends the run with everything already
/// committed left in place.
pub async fn run_pipeline(
    store: &Store,
    plan: &PipelinePlan,
    rng: &mut impl Rng,
) -> Result<Vec<TableOutcome>> {
    let mut outcomes = Vec::with_capacity(5);

    let crops = generate_crops();
    upload(store, &crops, "crops", plan.mode).await?;
    info!(rows = crops.len(), "persisted crops");
    outcomes.push(TableOutcome {
        table: "crops",
        rows: crops.len(),
    });

    let plantings = generate_plantings(store, plan.plantings, rng).await?;
    upload(store, &plantings, "crop_plants", plan.mode).await?;
    info!(rows = plantings.len(), "persisted crop_plants");
    outcomes.push(TableOutcome {
        table: "crop_plants",
        rows: plantings.len(),
    });

    let inspectors = generate_inspectors(plan.inspectors, rng)?;
    upload(store, &inspectors, "inspectors", plan.mode).await?;
    info!(rows = inspectors.len(), "persisted inspectors");
    outcomes.push(TableOutcome {
        table: "inspectors",
        rows: inspectors.len(),
    });

    let reports = generate_damage_reports(store, plan.damage_reports, rng).await?;
    upload(store, &reports, "damage_reports", plan.mode).await?;
    info!(rows = reports.len(), "persisted damage_reports");
    outcomes.push(TableOutcome {
        table: "damage_reports",
        rows: reports.len(),
    });

    let inspections = generate_inspections(store, plan.inspections, rng).await?;
    upload(store, &inspections, "inspections", plan.mode).await?;
    info!(rows = inspections.len(), "persisted inspections");
    outcomes.push(TableOutcome {
        table: "inspections",
        rows: inspections.len(),
    });

    Ok(outcomes)
}
