//! Score-based ordering and aggregate statistics
//!
//! Ranking is a stable descending sort: equal scores keep their
//! encounter order, which makes repeated ranking of the same input
//! byte-for-byte reproducible.

use serde::Serialize;

/// Sort items descending by a score projection, stable for ties
pub fn rank_descending<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> f64,
{
    // slice::sort_by is stable; comparing b to a flips the order while
    // leaving equal elements in encounter order.
    items.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Aggregate statistics over a numeric field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub max: f64,
    pub min: f64,
    /// Mean rounded to 2 decimals
    pub average: f64,
    pub range: f64,
}

/// Compute max/min/mean/range; `None` for an empty set
pub fn stats(values: &[f64]) -> Option<Stats> {
    if values.is_empty() {
        return None;
    }
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let sum: f64 = values.iter().sum();
    Some(Stats {
        max,
        min,
        average: round2(sum / values.len() as f64),
        range: max - min,
    })
}

/// Round to 1 decimal place, used for temperatures
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places, the precision all responses use
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places, used for probabilities
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
