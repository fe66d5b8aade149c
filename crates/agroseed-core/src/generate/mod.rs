//! # Referential Generators
//!
//! One generator per table. Each is a pure pipeline stage: read persisted
//! parent state through `&Store`, sample, emit a `RowSet`. Callers invoke
//! them in dependency order and persist every table before generating the
//! next, so foreign keys always point at rows that already exist.
//!
//! All randomness flows through one caller-owned RNG; a fixed seed makes an
//! entire multi-table run reproducible against identical parent state.

pub mod crops;
pub mod damage;
pub mod inspections;
pub mod inspectors;
pub mod plantings;

pub use crops::generate_crops;
pub use damage::generate_damage_reports;
pub use inspections::generate_inspections;
pub use inspectors::generate_inspectors;
pub use plantings::generate_plantings;

/// Growing regions shared by plantings and inspectors.
pub const REGIONS: [&str; 3] = ["Northern-belt", "Middle-belt", "Southern-belt"];
