//! # Crop Catalog
//!
//! The one non-random generator: emits the fixed crop catalog, one row per
//! name→category entry. No parent dependency, no RNG, idempotent.

use crate::value::{RowSet, Value};

/// The static crop catalog. Names are unique by construction.
pub const CROP_CATALOG: [(&str, &str); 10] = [
    ("maize", "grains"),
    ("beans", "legumes"),
    ("yam", "tubers"),
    ("tomato", "vegetables"),
    ("rice", "grains"),
    ("cassava", "tubers"),
    ("onion", "vegetables"),
    ("plantain", "fruits"),
    ("pepper", "vegetables"),
    ("groundnut", "legumes"),
];

/// Emit the crop catalog as a row set ready for upload.
pub fn generate_crops() -> RowSet {
    let mut rows = RowSet::new(["crop_name", "category"]);
    for (name, category) in CROP_CATALOG {
        rows.push(vec![Value::text(name), Value::text(category)]);
    }
    rows
}
