//! Tests for the classifier and the per-category seed table.

use super::common::{assert_decomposes, first_in_category, from_msd};
use palsum::seed::rules;
use palsum::{classify, Category, Error, Number};

/// Categories that can be the net result of classification.
const REACHABLE: [Category; 9] = [
    Category::A1,
    Category::A2,
    Category::A3,
    Category::A4,
    Category::B3,
    Category::B4,
    Category::B5,
    Category::B6,
    Category::B7,
];

// ============================================================================
// CLASSIFIER
// ============================================================================

#[test]
fn test_every_reachable_category_has_a_witness() {
    for base in [5, 10, 16] {
        for c in REACHABLE {
            let n = first_in_category(c, base, 5)
                .unwrap_or_else(|| panic!("no 5-digit {} in base {}", c, base));
            let got = classify(&Number::new(n, base).unwrap()).unwrap();
            assert_eq!(got.category, c);
        }
    }
}

#[test]
fn test_overwritten_categories_are_never_net() {
    // A_5/A_6 need a leading 1, which always routes to B_3..B_7;
    // B_1/B_2 are always followed by the B_3..B_7 chain.
    for c in [Category::A5, Category::A6, Category::B1, Category::B2] {
        assert_eq!(first_in_category(c, 10, 4), None, "{}", c);
    }
}

#[test]
fn test_a5_a6_surface_as_shadowed() {
    let shadowed: Vec<_> = (1000..1100u128)
        .filter_map(|n| classify(&Number::new(n, 10).unwrap()).unwrap().shadowed)
        .collect();
    assert!(shadowed.contains(&Category::A5));
    assert!(shadowed.contains(&Category::A6));
}

#[test]
fn test_classification_reads_msd_first_digits() {
    // n = 3 5 8 1 4 : n[L-1] = 3, n[L-2] = 5, n[0] = 4
    let n = from_msd(&[3, 5, 8, 1, 4], 10);
    assert_eq!(n, 35_814);
    let c = classify(&Number::new(n, 10).unwrap()).unwrap();
    assert_eq!(c.category, Category::A1);
    assert_eq!(c.shadowed, None);
}

#[test]
fn test_b7_needs_trailing_three() {
    let n = from_msd(&[1, 4, 7, 0, 3], 10);
    let c = classify(&Number::new(n, 10).unwrap()).unwrap();
    assert_eq!(c.category, Category::B7);
}

// ============================================================================
// SEED TABLE
// ============================================================================

#[test]
fn test_seed_lengths_per_family() {
    let n = Number::new(5_555_555, 10).unwrap();
    let l = n.len() as i64;
    for c in Category::ALL {
        let lens: Vec<i64> = rules(&n, c).unwrap().iter().map(|r| r.len).collect();
        let expected = match c {
            Category::A1 | Category::A2 | Category::A3 | Category::A4 => vec![l, l - 1, l - 2],
            Category::A5 | Category::A6 => vec![l - 1, l - 2, l - 3],
            _ => vec![l, l - 2, l - 3],
        };
        assert_eq!(lens, expected, "{}", c);
    }
}

#[test]
fn test_b_families_seed_two_leading_digits() {
    let n = Number::new(1_234_567, 10).unwrap();
    for c in Category::ALL.into_iter().filter(|c| c.is_b()) {
        let [r1, _, _] = rules(&n, c).unwrap();
        assert_eq!(r1.digits.len(), 2, "{}", c);
        assert_eq!(r1.digits[0], 1);
    }
}

#[test]
fn test_seed_failure_is_inspectable() {
    // B_5 asks for n[L-2] - 1 with n[L-2] = 0
    let n = Number::new(100_021, 10).unwrap();
    let err = palsum::seed::seed(&n, Category::B5).unwrap_err();
    assert_eq!(err, Error::DigitOutOfRange { value: -1, base: 10 });
}

// ============================================================================
// END TO END PER CATEGORY
// ============================================================================

#[test]
fn test_witnesses_decompose() {
    for base in [5, 7, 10] {
        for c in REACHABLE {
            for len in 3..=5 {
                if let Some(n) = first_in_category(c, base, len) {
                    assert_decomposes(n, base);
                }
            }
        }
    }
}
