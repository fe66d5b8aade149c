//! # Inspector Generator
//!
//! The other leaf table besides the crop catalog: no database reads.
//! Builds a pool of synthetic contact numbers (carrier prefix plus seven
//! random digits), then emits rows with generated names, uniform regions,
//! and contacts drawn from the pool with replacement — so inspectors can
//! legitimately share a field office number.

use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

use crate::error::Result;
use crate::generate::REGIONS;
use crate::sample::pick_uniform;
use crate::value::{RowSet, Value};

/// Mobile carrier prefixes used for contact numbers.
const CARRIER_PREFIXES: [&str; 6] = ["020", "054", "026", "024", "050", "055"];

/// Generate `n` synthetic ten-digit contact numbers.
pub fn phone_pool(n: usize, rng: &mut impl Rng) -> Result<Vec<String>> {
    let mut pool = Vec::with_capacity(n);
    for _ in 0..n {
        let prefix = *pick_uniform(&CARRIER_PREFIXES, rng)?;
        let mut number = String::with_capacity(10);
        number.push_str(prefix);
        for _ in 0..7 {
            number.push(char::from(b'0' + rng.random_range(0..10u8)));
        }
        pool.push(number);
    }
    Ok(pool)
}

/// Generate `n` inspector rows.
pub fn generate_inspectors(n: usize, rng: &mut impl Rng) -> Result<RowSet> {
    let contacts = phone_pool(n, rng)?;

    let mut rows = RowSet::new(["name", "region", "contact"]);
    for _ in 0..n {
        let name: String = Name().fake_with_rng(rng);
        let region = *pick_uniform(&REGIONS, rng)?;
        let contact = pick_uniform(&contacts, rng)?.clone();
        rows.push(vec![
            Value::owned(name),
            Value::text(region),
            Value::owned(contact),
        ]);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phone_numbers_are_ten_digits_with_known_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = phone_pool(50, &mut rng).unwrap();
        assert_eq!(pool.len(), 50);
        for number in &pool {
            assert_eq!(number.len(), 10, "number {}", number);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
            assert!(
                CARRIER_PREFIXES.iter().any(|p| number.starts_with(p)),
                "unknown prefix on {}",
                number
            );
        }
    }

    #[test]
    fn test_inspectors_have_valid_regions_and_contacts() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = generate_inspectors(20, &mut rng).unwrap();
        assert_eq!(rows.len(), 20);

        for region in rows.column_values("region") {
            let region = region.as_str().unwrap();
            assert!(REGIONS.contains(&region), "unknown region {}", region);
        }
        for contact in rows.column_values("contact") {
            let contact = contact.as_str().unwrap();
            assert_eq!(contact.len(), 10);
            assert!(contact.chars().all(|c| c.is_ascii_digit()));
        }
        for name in rows.column_values("name") {
            assert!(!name.as_str().unwrap().is_empty());
        }
    }

    #[test]
    fn test_zero_inspectors_is_empty_not_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = generate_inspectors(0, &mut rng).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_same_seed_same_inspectors() {
        let a = generate_inspectors(10, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_inspectors(10, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.rows(), b.rows());
    }
}
