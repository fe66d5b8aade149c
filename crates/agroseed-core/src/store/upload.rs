//! # Schema-Validated Upload
//!
//! Takes a generated `RowSet` and inserts it into a target table,
//! all-or-nothing. Before touching the database the column set of the row
//! set is compared against the table's declared columns, excluding
//! identifier columns on both sides — generators never produce primary keys
//! (the store assigns them), so `crop_id`, `plant_id` and friends are not
//! part of the comparison.
//!
//! All inserts run inside one transaction as batched multi-row INSERT
//! statements. Any failure rolls the whole upload back; a schema mismatch
//! aborts before the transaction even begins.

use tracing::{debug, info};

use crate::error::{AgroSeedError, Result};
use crate::store::Store;
use crate::value::RowSet;

/// Batch size for multi-row INSERT statements.
const INSERT_BATCH_SIZE: usize = 100;

/// What to do when the target table already contains rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfExists {
    /// Insert after the existing rows.
    Append,
    /// Delete the existing rows first, within the same transaction.
    Replace,
    /// Refuse to upload if the table is not empty.
    Fail,
}

/// Upload a row set into `table`, validating the schema first.
///
/// On success every row is committed; on any failure zero rows are
/// committed. A `SchemaMismatch` names the columns missing from and extra
/// in the row set.
pub async fn upload(store: &Store, rows: &RowSet, table: &str, mode: IfExists) -> Result<()> {
    if !store.table_exists(table).await? {
        return Err(AgroSeedError::TableMissing {
            table: table.to_string(),
        });
    }

    validate_columns(store, rows, table).await?;

    if mode == IfExists::Fail && store.count_rows(table).await? > 0 {
        return Err(AgroSeedError::TableNotEmpty {
            table: table.to_string(),
        });
    }

    let mut tx = store
        .pool()
        .begin()
        .await
        .map_err(|e| AgroSeedError::Upload {
            table: table.to_string(),
            message: "failed to begin transaction".to_string(),
            source: e,
        })?;

    if mode == IfExists::Replace {
        let delete_sql = format!("DELETE FROM \"{}\"", table);
        sqlx::query(&delete_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| AgroSeedError::Upload {
                table: table.to_string(),
                message: "failed to clear existing rows".to_string(),
                source: e,
            })?;
    }

    let col_list = rows
        .columns()
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");

    for chunk in rows.rows().chunks(INSERT_BATCH_SIZE) {
        let sql = build_batched_insert(table, &col_list, chunk);
        debug!(table, batch = chunk.len(), "inserting batch");
        sqlx::query(&sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| AgroSeedError::Upload {
                table: table.to_string(),
                message: "batched INSERT failed".to_string(),
                source: e,
            })?;
    }

    tx.commit().await.map_err(|e| AgroSeedError::Upload {
        table: table.to_string(),
        message: "failed to commit transaction".to_string(),
        source: e,
    })?;

    info!(table, rows = rows.len(), "upload committed");
    Ok(())
}

/// Compare the row set's non-identifier columns with the table's.
async fn validate_columns(store: &Store, rows: &RowSet, table: &str) -> Result<()> {
    let db_columns: Vec<String> = store
        .table_columns(table)
        .await?
        .into_iter()
        .filter(|c| !is_identifier_column(c))
        .collect();
    let row_columns: Vec<&String> = rows
        .columns()
        .iter()
        .filter(|c| !is_identifier_column(c))
        .collect();

    let missing: Vec<&str> = db_columns
        .iter()
        .filter(|c| !row_columns.iter().any(|rc| rc.as_str() == c.as_str()))
        .map(String::as_str)
        .collect();
    let extra: Vec<&str> = row_columns
        .iter()
        .filter(|c| !db_columns.iter().any(|dc| dc == c.as_str()))
        .map(|c| c.as_str())
        .collect();

    if !missing.is_empty() || !extra.is_empty() {
        return Err(AgroSeedError::SchemaMismatch {
            table: table.to_string(),
            missing: missing.join(", "),
            extra: extra.join(", "),
        });
    }
    Ok(())
}

/// A column is identifier-like if it is `id` or ends in `_id`. Identifier
/// columns are excluded from schema comparison on both sides.
fn is_identifier_column(name: &str) -> bool {
    name == "id" || name.ends_with("_id")
}

/// Build a batched multi-row INSERT statement.
///
/// Produces: `INSERT INTO "table" ("col1", "col2") VALUES (v1, v2), (v3, v4)`
fn build_batched_insert(
    table: &str,
    col_list: &str,
    rows: &[Vec<crate::value::Value>],
) -> String {
    let mut sql = format!("INSERT INTO \"{}\" ({}) VALUES ", table, col_list);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&value.to_sql_literal());
        }
        sql.push(')');
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_is_identifier_column() {
        assert!(is_identifier_column("id"));
        assert!(is_identifier_column("crop_id"));
        assert!(is_identifier_column("inspector_id"));
        assert!(!is_identifier_column("plant_date"));
        assert!(!is_identifier_column("region"));
        assert!(!is_identifier_column("identity"));
    }

    #[test]
    fn test_build_batched_insert() {
        let rows = vec![
            vec![Value::Int(1), Value::text("Northern-belt")],
            vec![Value::Int(2), Value::text("Middle-belt")],
        ];
        let sql = build_batched_insert("crop_plants", "\"crop_id\", \"region\"", &rows);
        assert!(sql.starts_with("INSERT INTO \"crop_plants\" (\"crop_id\", \"region\") VALUES "));
        assert!(sql.contains("(1, 'Northern-belt')"));
        assert!(sql.contains("(2, 'Middle-belt')"));
    }
}
