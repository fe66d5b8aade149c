pub mod init;
pub mod preview;
pub mod seed;

use std::path::Path;

use anyhow::Result;

use agroseed_core::config::AgroSeedConfig;
use agroseed_core::AgroSeedError;

/// Resolve the database URL: CLI flag (already env-backed via clap), then
/// the optional agroseed.toml.
pub fn resolve_db_url(flag: Option<&str>, config: Option<&AgroSeedConfig>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }
    if let Some(url) = config.and_then(|c| c.database.url.clone()) {
        return Ok(url);
    }
    Err(AgroSeedError::NoDatabaseUrl.into())
}

/// Load the optional agroseed.toml from the current directory.
pub fn load_config() -> Result<Option<AgroSeedConfig>> {
    Ok(agroseed_core::config::read_config(Path::new("."))?)
}
