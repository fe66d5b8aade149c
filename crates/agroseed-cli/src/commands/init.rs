use anyhow::{Context, Result};

use agroseed_core::Store;

use crate::args::InitArgs;
use crate::commands::{load_config, resolve_db_url};

pub async fn run(args: &InitArgs) -> Result<()> {
    let config = load_config()?;
    let db_url = resolve_db_url(args.db.as_deref(), config.as_ref())?;

    let store = Store::create(&db_url)
        .await
        .context("Failed to open database")?;
    store
        .apply_schema()
        .await
        .context("Failed to create schema")?;

    println!("✓ Created monitoring schema (crops, crop_plants, damage_reports, inspectors, inspections)");
    Ok(())
}
