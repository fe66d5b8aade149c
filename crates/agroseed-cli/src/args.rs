use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "agroseed",
    about = "Seed an agricultural monitoring database with referentially consistent fake data",
    version,
    after_help = "Examples:\n  agroseed init --db sqlite://farm.db\n  agroseed seed --db sqlite://farm.db --rows 200 --seed 42\n  agroseed seed --rows 100 --table-rows crop_plants=500   # DB from .env\n  agroseed preview --db sqlite://farm.db --rows 5"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the five-table monitoring schema
    Init(InitArgs),

    /// Generate and upload data for all five tables in dependency order
    Seed(SeedArgs),

    /// Generate sample rows against the live database without inserting
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Database connection URL (sqlite://...)
    /// Falls back to DATABASE_URL env var or .env file
    #[arg(long, env = "DATABASE_URL")]
    pub db: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database connection URL (sqlite://...)
    /// Falls back to DATABASE_URL env var or .env file
    #[arg(long, env = "DATABASE_URL")]
    pub db: Option<String>,

    /// Number of rows to generate per table
    #[arg(long, default_value = "100")]
    pub rows: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Per-table row count overrides (e.g., crop_plants=500,inspections=200)
    #[arg(long, value_delimiter = ',')]
    pub table_rows: Vec<String>,

    /// What to do with rows already in the target tables
    #[arg(long, default_value = "append")]
    pub mode: UploadMode,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Database connection URL (sqlite://...)
    #[arg(long, env = "DATABASE_URL")]
    pub db: Option<String>,

    /// Number of sample rows to preview per table
    #[arg(long, default_value = "5")]
    pub rows: usize,

    /// Random seed for a reproducible preview
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum UploadMode {
    Append,
    Replace,
    Fail,
}

impl SeedArgs {
    /// Parse table row overrides like "crop_plants=500,inspections=200".
    pub fn parse_table_rows(&self) -> std::collections::BTreeMap<String, usize> {
        let mut map = std::collections::BTreeMap::new();
        for entry in &self.table_rows {
            if let Some((table, count_str)) = entry.split_once('=') {
                if let Ok(count) = count_str.parse::<usize>() {
                    map.insert(table.to_string(), count);
                }
            }
        }
        map
    }
}
