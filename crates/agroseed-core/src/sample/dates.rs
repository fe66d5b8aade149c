//! # Date Range Helpers
//!
//! Business-day range enumeration plus the weight shapes the generators
//! apply to them: front-loaded step weights (planting and damage-report
//! dates cluster early in their seasons) and linearly decaying weights
//! (inspections thin out over time).

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Enumerate the business days (Mon–Fri) in `start..=end`.
///
/// Returns an empty vector if `start > end`.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(current);
        }
        current += Duration::days(1);
    }
    days
}

/// Enumerate every `step`-th business day in `start..=end`.
pub fn business_days_stepped(start: NaiveDate, end: NaiveDate, step: usize) -> Vec<NaiveDate> {
    let step = step.max(1);
    business_days(start, end)
        .into_iter()
        .step_by(step)
        .collect()
}

/// Step weights favoring the front of a range: indices below
/// `front_fraction * len` get `front_weight`, the rest get `tail_weight`.
pub fn front_loaded_weights(
    len: usize,
    front_fraction: f64,
    front_weight: f64,
    tail_weight: f64,
) -> Vec<f64> {
    let cutoff = front_fraction * len as f64;
    (0..len)
        .map(|i| {
            if (i as f64) < cutoff {
                front_weight
            } else {
                tail_weight
            }
        })
        .collect()
}

/// Linearly decaying weights: index 0 gets weight `len`, the last index
/// gets weight 1.
pub fn linear_decay_weights(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_business_days_skip_weekends() {
        // 2024-04-01 is a Monday; one full week has 5 business days.
        let days = business_days(date(2024, 4, 1), date(2024, 4, 7));
        assert_eq!(days.len(), 5);
        assert!(days
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn test_business_days_bounds() {
        let days = business_days(date(2024, 4, 1), date(2024, 8, 31));
        assert_eq!(days.first(), Some(&date(2024, 4, 1)));
        // 2024-08-31 is a Saturday; the last business day is the 30th.
        assert_eq!(days.last(), Some(&date(2024, 8, 30)));
    }

    #[test]
    fn test_business_days_inverted_range_is_empty() {
        assert!(business_days(date(2024, 5, 1), date(2024, 4, 1)).is_empty());
    }

    #[test]
    fn test_business_days_stepped() {
        let all = business_days(date(2024, 10, 1), date(2024, 10, 31));
        let stepped = business_days_stepped(date(2024, 10, 1), date(2024, 10, 31), 3);
        assert_eq!(stepped.len(), all.len().div_ceil(3));
        assert_eq!(stepped[0], all[0]);
        assert_eq!(stepped[1], all[3]);
    }

    #[test]
    fn test_front_loaded_weights_split() {
        let w = front_loaded_weights(10, 0.7, 5.0, 2.5);
        assert_eq!(w.len(), 10);
        assert_eq!(w[..7], [5.0; 7]);
        assert_eq!(w[7..], [2.5; 3]);
    }

    #[test]
    fn test_linear_decay_weights() {
        let w = linear_decay_weights(4);
        assert_eq!(w, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_zero_length_weights() {
        assert!(front_loaded_weights(0, 0.5, 5.0, 1.0).is_empty());
        assert!(linear_decay_weights(0).is_empty());
    }
}
