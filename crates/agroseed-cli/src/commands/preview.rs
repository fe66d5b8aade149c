use anyhow::{Context, Result};
use comfy_table::Table as ComfyTable;
use rand::rngs::StdRng;
use rand::SeedableRng;

use agroseed_core::generate::{
    generate_crops, generate_damage_reports, generate_inspections, generate_inspectors,
    generate_plantings,
};
use agroseed_core::{AgroSeedError, RowSet, Store};

use crate::args::PreviewArgs;
use crate::commands::{load_config, resolve_db_url};

/// Generate sample rows for every table against the live database and
/// print them without inserting anything. Dependent tables whose parents
/// are not yet persisted are reported and skipped.
pub async fn run(args: &PreviewArgs) -> Result<()> {
    let config = load_config()?;
    let db_url = resolve_db_url(args.db.as_deref(), config.as_ref())?;

    let store = Store::connect(&db_url)
        .await
        .context("Failed to connect to database")?;

    let mut rng = StdRng::seed_from_u64(args.seed);

    print_rowset("crops", &generate_crops());
    print_rowset("inspectors", &generate_inspectors(args.rows, &mut rng)?);

    match generate_plantings(&store, args.rows, &mut rng).await {
        Ok(rows) => print_rowset("crop_plants", &rows),
        Err(e) => skip("crop_plants", e)?,
    }
    match generate_damage_reports(&store, args.rows, &mut rng).await {
        Ok(rows) => print_rowset("damage_reports", &rows),
        Err(e) => skip("damage_reports", e)?,
    }
    match generate_inspections(&store, args.rows, &mut rng).await {
        Ok(rows) => print_rowset("inspections", &rows),
        Err(e) => skip("inspections", e)?,
    }

    Ok(())
}

/// An empty parent just means that table can't be previewed yet; any other
/// error is real.
fn skip(table: &str, err: AgroSeedError) -> Result<()> {
    match err {
        AgroSeedError::EmptyPopulation { context } => {
            println!("━━━ {} (skipped: {}) ━━━\n", table, context);
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn print_rowset(table: &str, rows: &RowSet) {
    println!("━━━ {} ({} rows) ━━━", table, rows.len());

    let mut t = ComfyTable::new();
    t.set_header(rows.columns().iter().map(String::as_str).collect::<Vec<_>>());
    for row in rows.rows() {
        t.add_row(row.iter().map(|v| v.to_string()).collect::<Vec<_>>());
    }
    println!("{}\n", t);
}
