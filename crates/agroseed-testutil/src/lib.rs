//! Test utilities for AgroSeed: in-memory databases with the five-table
//! schema applied, plus helpers for planting precise parent state before
//! exercising a generator.
//!
//! Panics are fine here — these helpers only run inside tests.

use agroseed_core::Store;

/// Open an in-memory SQLite store with the monitoring schema applied.
pub async fn memory_store() -> Store {
    let store = Store::connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite connection");
    store.apply_schema().await.expect("schema DDL");
    store
}

/// Insert one crop row, returning its assigned crop_id.
pub async fn insert_crop(store: &Store, name: &str, category: &str) -> i64 {
    let result = sqlx::query("INSERT INTO crops (crop_name, category) VALUES (?, ?)")
        .bind(name)
        .bind(category)
        .execute(store.pool())
        .await
        .expect("insert crop");
    result.last_insert_rowid()
}

/// Insert one planting row, returning its assigned plant_id.
pub async fn insert_planting(store: &Store, crop_id: i64, region: &str, date: &str) -> i64 {
    let result =
        sqlx::query("INSERT INTO crop_plants (crop_id, region, plant_date) VALUES (?, ?, ?)")
            .bind(crop_id)
            .bind(region)
            .bind(date)
            .execute(store.pool())
            .await
            .expect("insert planting");
    result.last_insert_rowid()
}

/// Insert one damage report row, returning its assigned report_id.
pub async fn insert_damage_report(
    store: &Store,
    plant_id: i64,
    damage_type: &str,
    severity: i64,
    date: &str,
) -> i64 {
    let result = sqlx::query(
        "INSERT INTO damage_reports (plant_id, damage_type, severity, report_date) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(plant_id)
    .bind(damage_type)
    .bind(severity)
    .bind(date)
    .execute(store.pool())
    .await
    .expect("insert damage report");
    result.last_insert_rowid()
}

/// Insert one inspector row, returning its assigned inspector_id.
pub async fn insert_inspector(store: &Store, name: &str, region: &str, contact: &str) -> i64 {
    let result = sqlx::query("INSERT INTO inspectors (name, region, contact) VALUES (?, ?, ?)")
        .bind(name)
        .bind(region)
        .bind(contact)
        .execute(store.pool())
        .await
        .expect("insert inspector");
    result.last_insert_rowid()
}
