pub mod config;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod sample;
pub mod store;
pub mod value;

// Re-export key types for convenience
pub use error::{AgroSeedError, Result};
pub use store::{IfExists, Store};
pub use value::{RowSet, Value};
