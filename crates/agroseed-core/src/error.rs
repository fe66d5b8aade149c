//! # Error Types
//!
//! Defines `AgroSeedError`, the unified error enum for every failure mode in
//! the AgroSeed pipeline. Every variant carries enough context (table name,
//! column lists, offending query) to diagnose a failed run from the message
//! alone.

use thiserror::Error;

/// All errors that can occur in AgroSeed operations.
#[derive(Error, Debug)]
pub enum AgroSeedError {
    #[error("Database connection failed: {message}\n  Connection string: {connection_hint}\n  Cause: {source}")]
    Connection {
        message: String,
        connection_hint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query failed ({query}): {source}")]
    Query {
        query: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Cannot sample from an empty population: {context}")]
    EmptyPopulation { context: String },

    #[error("Column mismatch uploading to '{table}':\n  Missing in row set: [{missing}]\n  Extra in row set: [{extra}]\nNo rows were committed.")]
    SchemaMismatch {
        table: String,
        missing: String,
        extra: String,
    },

    #[error("Table '{table}' does not exist in the database")]
    TableMissing { table: String },

    #[error("Table '{table}' already contains rows and upload mode is 'fail'")]
    TableNotEmpty { table: String },

    #[error("Upload to '{table}' failed, transaction rolled back: {message}\n  Cause: {source}")]
    Upload {
        table: String,
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("No database URL provided. AgroSeed looks for a connection in this order:\n  1. --db flag\n  2. DATABASE_URL environment variable\n  3. .env file with DATABASE_URL\n  4. agroseed.toml [database] section\n\nExample: agroseed seed --db sqlite://farm.db --rows 200")]
    NoDatabaseUrl,

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AgroSeedError {
    /// Shorthand for the sampling error raised when a parent table (or a
    /// derived weight vector) has nothing to draw from.
    pub fn empty_population(context: impl Into<String>) -> Self {
        AgroSeedError::EmptyPopulation {
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgroSeedError>;
