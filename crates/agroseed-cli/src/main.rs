use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

#[tokio::main]
async fn main() {
    // Load .env file first so env-backed flags see it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default over RUST_LOG's absence
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let result = match &cli.command {
        Command::Init(args) => commands::init::run(args).await,
        Command::Seed(args) => commands::seed::run(args).await,
        Command::Preview(args) => commands::preview::run(args).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
