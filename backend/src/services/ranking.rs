//! Confidence-based ranking of classifier output

use std::cmp::Ordering;

use shared::{ClassProbability, CropScore};

/// Number of candidates reported.
pub const TOP_N: usize = 3;

/// Rank a class-probability distribution and keep the top 3.
///
/// Stable sort by descending probability: entries with equal probability
/// keep the classifier's native label order, so identical inputs always
/// produce identical rankings. Percent scaling and 2-decimal rounding
/// happen after ranking; comparisons use the full-precision probabilities.
pub fn rank(distribution: &[ClassProbability]) -> Vec<CropScore> {
    let mut ranked: Vec<&ClassProbability> = distribution.iter().collect();
    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(TOP_N)
        .map(|entry| CropScore {
            crop: entry.crop.clone(),
            probability: to_percent(entry.probability),
        })
        .collect()
}

/// Scale a [0, 1] probability to percent, rounded to 2 decimal places.
fn to_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
