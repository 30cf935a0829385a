//! Ranking engine tests
//!
//! Covers descending order, the stable tie-break on the classifier's
//! native label order, determinism, and presentation rounding.

use proptest::prelude::*;

use crop_backend::services::ranking::{rank, TOP_N};
use shared::ClassProbability;

fn entry(crop: &str, probability: f64) -> ClassProbability {
    ClassProbability {
        crop: crop.to_string(),
        probability,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_sorts_descending_and_takes_three() {
    let distribution = vec![
        entry("chickpea", 0.10),
        entry("lentil", 0.05),
        entry("maize", 0.25),
        entry("rice", 0.60),
    ];

    let top3 = rank(&distribution);

    assert_eq!(top3.len(), TOP_N);
    assert_eq!(top3[0].crop, "rice");
    assert_eq!(top3[1].crop, "maize");
    assert_eq!(top3[2].crop, "chickpea");
}

#[test]
fn test_tie_break_keeps_native_order() {
    let distribution = vec![
        entry("banana", 0.25),
        entry("coconut", 0.25),
        entry("jute", 0.50),
    ];

    let top3 = rank(&distribution);

    // Equal probabilities are not re-sorted: banana stays ahead of coconut.
    assert_eq!(top3[0].crop, "jute");
    assert_eq!(top3[1].crop, "banana");
    assert_eq!(top3[2].crop, "coconut");
}

#[test]
fn test_deterministic_for_fixed_input() {
    let distribution = vec![
        entry("rice", 0.407),
        entry("maize", 0.407),
        entry("cotton", 0.186),
    ];

    let first = rank(&distribution);
    let second = rank(&distribution);
    assert_eq!(first, second);
}

#[test]
fn test_percent_scaling_and_rounding() {
    let distribution = vec![
        entry("rice", 0.123456),
        entry("maize", 0.5),
        entry("papaya", 0.25),
    ];

    let top3 = rank(&distribution);

    assert_eq!(top3[0].probability, 50.0);
    assert_eq!(top3[1].probability, 25.0);
    assert!((top3[2].probability - 12.35).abs() < 1e-9);
}

#[test]
fn test_rounding_does_not_reorder() {
    // 0.30004 and 0.29996 both present as 30.0 but keep their true order.
    let distribution = vec![
        entry("first", 0.29996),
        entry("second", 0.30004),
        entry("third", 0.4),
    ];

    let top3 = rank(&distribution);

    assert_eq!(top3[1].crop, "second");
    assert_eq!(top3[2].crop, "first");
    assert_eq!(top3[1].probability, top3[2].probability);
}

#[test]
fn test_fewer_than_three_labels() {
    let distribution = vec![entry("rice", 0.7), entry("maize", 0.3)];
    let top3 = rank(&distribution);
    assert_eq!(top3.len(), 2);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any probability distribution, the output is sorted descending,
    /// at most 3 entries long, and sums to no more than 100%.
    #[test]
    fn prop_rank_output_well_formed(
        weights in prop::collection::vec(0.0f64..1.0, 1..12)
    ) {
        let total: f64 = weights.iter().sum();
        prop_assume!(total > 0.0);

        let distribution: Vec<ClassProbability> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| entry(&format!("crop{}", i), w / total))
            .collect();

        let top3 = rank(&distribution);

        prop_assert_eq!(top3.len(), distribution.len().min(TOP_N));
        for pair in top3.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
        // Presentation rounding can add up to half a hundredth per entry.
        let sum: f64 = top3.iter().map(|s| s.probability).sum();
        prop_assert!(sum <= 100.0 + 0.015 + 1e-9);
    }

    /// Ranking is deterministic: repeated calls agree exactly.
    #[test]
    fn prop_rank_deterministic(
        weights in prop::collection::vec(0.0f64..1.0, 1..12)
    ) {
        let distribution: Vec<ClassProbability> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| entry(&format!("crop{}", i), *w))
            .collect();

        prop_assert_eq!(rank(&distribution), rank(&distribution));
    }
}
